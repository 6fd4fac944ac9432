pub mod record;
pub mod roster;
