/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address_family;
pub mod batch;
pub mod cidr_record;
pub mod errors;
pub mod format;
