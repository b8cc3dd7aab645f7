pub mod collection;
pub mod fields;
pub mod row;
pub mod standalone;

#[cfg(test)]
pub(crate) mod testing;

pub use collection::{RowCollection, RowKey};
pub use fields::{FormFields, Notifier, PriceFieldStatus};
pub use row::RowController;
pub use standalone::{
    ERROR_RESET_DELAY, SUCCESS_RESET_DELAY, StandaloneController, StatusReset, run_status_reset,
};
