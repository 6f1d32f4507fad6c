use crate::core::cidr_record::CidrRecord;
use crate::core::errors::Error;

/*-------------------------------------------------------------------------------------------------
  Batch Results
-------------------------------------------------------------------------------------------------*/

/// Results of parsing a batch of CIDR strings: the records that parsed successfully, in input
/// order, and the per-item failures.
#[derive(Debug, Default)]
pub struct BatchResults {
    /// Parsed [CidrRecord]s, in input order.
    pub records: Vec<CidrRecord>,

    /// Inputs that failed to parse, in input order.
    pub failures: Vec<ParseFailure>,
}

/// A single CIDR string that failed to parse, with its position in the input sequence.
#[derive(Debug)]
pub struct ParseFailure {
    /// Zero-based position of the string in the input sequence.
    pub index: usize,

    /// The offending input string.
    pub input: String,

    /// The error produced by the parse attempt.
    pub error: Error,
}

/*-------------------------------------------------------------------------------------------------
  Batch Parsing
-------------------------------------------------------------------------------------------------*/

/// Parse a sequence of CIDR strings, collecting successes and failures separately. A failed item
/// never aborts the batch; the caller decides whether to report, count, or ignore the failures.
pub fn parse_batch<I, S>(cidrs: I) -> BatchResults
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut results = BatchResults::default();

    for (index, cidr) in cidrs.into_iter().enumerate() {
        match cidr.as_ref().parse::<CidrRecord>() {
            Ok(record) => results.records.push(record),
            Err(error) => results.failures.push(ParseFailure {
                index,
                input: cidr.as_ref().to_string(),
                error,
            }),
        }
    }

    results
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
