//! Job board engine: reading input files and decoding them into job batches.
mod decode;
mod error;
mod load;
mod schema;

pub use decode::{decode_batch, decode_bytes};
pub use error::LoadError;
pub use load::{load_batch, load_file};
pub use schema::JobRecord;
