//! Compute subnet metadata from IPv4 CIDR notation: network address, subnet mask, usable host
//! count, usable host range boundaries, and broadcast address, with plain, CSV, and TSV
//! renderings of the results.
//!
//! ```
//! use cidrcalc::CidrRecord;
//!
//! let record = CidrRecord::parse("192.168.1.0/24").unwrap();
//!
//! assert_eq!(record.host_count, 254);
//! assert_eq!(record.min_host, "192.168.1.1".parse().ok());
//! assert_eq!(record.max_host, "192.168.1.254".parse().ok());
//! assert!(record.contains("192.168.1.42".parse().unwrap()));
//! ```

/*-------------------------------------------------------------------------------------------------
  Library Modules
-------------------------------------------------------------------------------------------------*/

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::address_family::AddressFamily;
pub use crate::core::batch::{parse_batch, BatchResults, ParseFailure};
pub use crate::core::cidr_record::CidrRecord;
pub use crate::core::errors::{Error, Result};
pub use crate::core::format::{format_records, OutputFormat, HEADERS};
