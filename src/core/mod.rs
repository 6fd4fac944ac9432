pub mod backup;
pub mod ledger;
pub mod session;
pub mod window;
