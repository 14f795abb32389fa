//! UID minting.
//!
//! UIDs are derived from random UUIDs under the `2.25` arc (ISO/IEC 9834-8),
//! which needs no registered organisation root and stays within 64 characters.

use uuid::Uuid;

const UUID_ROOT: &str = "2.25";

pub fn mint_uid() -> String {
    format!("{}.{}", UUID_ROOT, Uuid::new_v4().as_u128())
}
