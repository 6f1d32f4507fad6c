use crate::core::cidr_record::CidrRecord;
use std::net::Ipv4Addr;

/*-------------------------------------------------------------------------------------------------
  Record Formatting
-------------------------------------------------------------------------------------------------*/

/// Column labels shared by all output formats, in output order.
pub const HEADERS: [&str; 7] = [
    "source_cidr",
    "network",
    "mask",
    "host_num",
    "min_address",
    "max_address",
    "broadcast",
];

// Width of the longest column label; plain-format labels are padded to this width.
const LABEL_WIDTH: usize = 11;

/// Output format for a sequence of [CidrRecord]s.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    /// Labeled line per field, blank line between records.
    Plain,

    /// Header line plus one comma-separated line per record.
    Csv,

    /// Header line plus one tab-separated line per record.
    Tsv,
}

/// Render a sequence of [CidrRecord]s in the requested output format.
///
/// ```
/// use cidrcalc::{format_records, CidrRecord, OutputFormat};
///
/// let records = vec![CidrRecord::parse("192.168.1.0/24").unwrap()];
/// let csv = format_records(&records, OutputFormat::Csv);
///
/// assert!(csv.ends_with("192.168.1.0/24,192.168.1.0,255.255.255.0,254,192.168.1.1,192.168.1.254,192.168.1.255\n"));
/// ```
pub fn format_records(records: &[CidrRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => format_plain(records),
        OutputFormat::Csv => format_delimited(records, b','),
        OutputFormat::Tsv => format_delimited(records, b'\t'),
    }
}

/*--------------------------------------------------------------------------------------
  Plain Format
--------------------------------------------------------------------------------------*/

fn format_plain(records: &[CidrRecord]) -> String {
    let mut output = String::new();

    for record in records {
        for (label, value) in HEADERS.iter().zip(record_fields(record)) {
            // An absent value leaves the line as a bare "label :", with no trailing blank
            let line = format!("{label:<LABEL_WIDTH$} : {value}");
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/*--------------------------------------------------------------------------------------
  Delimited Formats (CSV/TSV)
--------------------------------------------------------------------------------------*/

// Field values are dotted-decimal or numeric tokens that never contain a delimiter, so the
// writer's quoting never engages and the output is a plain join.
fn format_delimited(records: &[CidrRecord], delimiter: u8) -> String {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer
        .write_record(HEADERS)
        .expect("writing to an in-memory buffer cannot fail");

    for record in records {
        writer
            .write_record(record_fields(record))
            .expect("writing to an in-memory buffer cannot fail");
    }

    let buffer = writer
        .into_inner()
        .expect("writing to an in-memory buffer cannot fail");
    String::from_utf8(buffer).expect("formatted records are valid UTF-8")
}

/*--------------------------------------------------------------------------------------
  Record Fields
--------------------------------------------------------------------------------------*/

fn record_fields(record: &CidrRecord) -> [String; 7] {
    [
        record.source_cidr.clone(),
        record.network.to_string(),
        record.mask.to_string(),
        record.host_count.to_string(),
        optional_address(record.min_host),
        optional_address(record.max_host),
        optional_address(record.broadcast),
    ]
}

fn optional_address(address: Option<Ipv4Addr>) -> String {
    address.map(|address| address.to_string()).unwrap_or_default()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
