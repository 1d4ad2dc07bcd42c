/// Catalog identifier of a canonical body style
pub type BodyStyleId = i64;
