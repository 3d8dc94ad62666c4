pub mod fit;
pub mod record;
