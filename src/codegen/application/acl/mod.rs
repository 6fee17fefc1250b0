pub mod json_context_renderer_impl;
