pub mod ix_contribute;
pub mod ix_create_campaign;
pub mod ix_refund;
pub mod ix_withdraw;

pub use ix_contribute::*;
pub use ix_create_campaign::*;
pub use ix_refund::*;
pub use ix_withdraw::*;
