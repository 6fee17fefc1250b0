#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    StringOrTemporal,
}
