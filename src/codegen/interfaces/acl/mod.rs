pub mod template_renderer;
