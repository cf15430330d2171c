mod csv;
mod types;
mod validator;
mod yahoo;

pub use csv::{CsvConnector, CsvProvider};
pub use types::RequiredColumn;
pub use validator::DataValidator;
pub use yahoo::YahooProvider;
