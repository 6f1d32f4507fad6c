use crate::core::address_family::AddressFamily;
use crate::core::errors::{Error, Result};
use ipnetwork::Ipv4Network;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  CIDR Record
-------------------------------------------------------------------------------------------------*/

/// Subnet metadata computed from a single IPv4 CIDR string: the network prefix, subnet mask,
/// usable host count, usable host range, and broadcast address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CidrRecord {
    /// Original CIDR string, preserved verbatim.
    pub source_cidr: String,

    /// Address family of the parsed prefix.
    pub family: AddressFamily,

    /// Parsed IPv4 network prefix.
    pub prefix: Ipv4Network,

    /// Network address with the host bits cleared.
    pub network: Ipv4Addr,

    /// Number of leading mask bits set.
    pub prefix_length: u8,

    /// Address width in bits.
    pub bits: u8,

    /// Subnet mask derived from the prefix length.
    pub mask: Ipv4Addr,

    /// Number of usable host addresses.
    pub host_count: u64,

    /// First usable host address; `None` for a /32 prefix.
    pub min_host: Option<Ipv4Addr>,

    /// Last usable host address; `None` for a /32 prefix.
    pub max_host: Option<Ipv4Addr>,

    /// Address with all host bits set; `None` when the prefix has at most one usable host.
    pub broadcast: Option<Ipv4Addr>,
}

/*--------------------------------------------------------------------------------------
  CIDR Record Implementation
--------------------------------------------------------------------------------------*/

impl CidrRecord {
    /// Parse a CIDR string (`a.b.c.d/n`) and compute the subnet metadata.
    ///
    /// ```
    /// let record = cidrcalc::CidrRecord::parse("192.168.1.0/24").unwrap();
    ///
    /// assert_eq!(record.host_count, 254);
    /// assert_eq!(record.broadcast, "192.168.1.255".parse().ok());
    /// ```
    pub fn parse(cidr: &str) -> Result<CidrRecord> {
        cidr.parse()
    }

    /// Check whether an IP address falls within this prefix; inclusive of the network and
    /// broadcast addresses (standard subnet containment, not the usable host range).
    pub fn contains(&self, address: Ipv4Addr) -> bool {
        self.prefix.contains(address)
    }

    /*-------------------------------------------------------------------------
      Computed Fields
    -------------------------------------------------------------------------*/

    fn from_prefix(source_cidr: &str, prefix: Ipv4Network) -> CidrRecord {
        let family = AddressFamily::Ipv4;
        let bits = family.bits();
        let prefix_length = prefix.prefix();

        let network = prefix.network();
        let mask = prefix.mask();
        let host_count = host_count(prefix_length, bits);

        let (min_host, max_host, broadcast) = if host_count > 1 {
            let broadcast = prefix.broadcast();
            if prefix_length == bits - 1 {
                // RFC 3021 point-to-point link: both addresses are usable hosts
                (Some(network), Some(broadcast), Some(broadcast))
            } else {
                let min_host = Ipv4Addr::from(u32::from(network) + 1);
                let max_host = Ipv4Addr::from(u32::from(broadcast) - 1);
                (Some(min_host), Some(max_host), Some(broadcast))
            }
        } else {
            (None, None, None)
        };

        CidrRecord {
            source_cidr: source_cidr.to_string(),
            family,
            prefix,
            network,
            prefix_length,
            bits,
            mask,
            host_count,
            min_host,
            max_host,
            broadcast,
        }
    }
}

/*--------------------------------------------------------------------------------------
  Parse a CIDR String
--------------------------------------------------------------------------------------*/

impl FromStr for CidrRecord {
    type Err = Error;

    fn from_str(cidr: &str) -> Result<CidrRecord> {
        let (address, prefix_length) = cidr.split_once('/').ok_or_else(|| Error::Parse {
            input: cidr.to_string(),
            reason: "missing prefix length".to_string(),
        })?;

        let address: IpAddr = address.parse().map_err(|_| Error::Parse {
            input: cidr.to_string(),
            reason: "invalid IP address".to_string(),
        })?;

        let prefix_length: u8 = prefix_length.parse().map_err(|_| Error::Parse {
            input: cidr.to_string(),
            reason: "invalid prefix length".to_string(),
        })?;

        if prefix_length > AddressFamily::of(address).bits() {
            return Err(Error::Parse {
                input: cidr.to_string(),
                reason: "prefix length out of range".to_string(),
            });
        }

        let address = match address {
            IpAddr::V4(address) => address,
            IpAddr::V6(_) => {
                return Err(Error::UnsupportedFamily {
                    input: cidr.to_string(),
                })
            }
        };

        let prefix = Ipv4Network::new(address, prefix_length).map_err(|error| Error::Parse {
            input: cidr.to_string(),
            reason: error.to_string(),
        })?;

        Ok(CidrRecord::from_prefix(cidr, prefix))
    }
}

/*--------------------------------------------------------------------------------------
  Host Count
--------------------------------------------------------------------------------------*/

// The network and broadcast addresses are not usable hosts, except in a /31 (two usable
// point-to-point endpoints) and a /32 (the single address is the host). A /0 prefix holds
// 2^32 - 2 hosts, so the count is computed in u64.
fn host_count(prefix_length: u8, bits: u8) -> u64 {
    if prefix_length == bits {
        1
    } else if prefix_length == bits - 1 {
        2
    } else {
        (1u64 << (bits - prefix_length)) - 2
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
