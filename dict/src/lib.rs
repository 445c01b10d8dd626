//! Address dictionary driver.
//!
//! Loads address records from a CSV file into either an unindexed scan dictionary or a
//! [`ptrie::PatriciaTree`], then answers key queries read one per line, writing matching records
//! to an output file and a per-query comparison summary to a separate sink.

pub mod address;
pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod reader;
pub mod scan;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use config::Config;
use error::{DictError, Result};
use query::{process_queries, Dictionary, QueryTotals};
use reader::AddressReader;

fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> DictError + '_ {
    move |source| DictError::Open {
        path: path.to_path_buf(),
        source,
    }
}

/// Runs one session: build the dictionary named by `config`, then answer every line of `queries`.
pub fn run<Q, S>(config: &Config, queries: Q, summary: &mut S) -> Result<QueryTotals>
where
    Q: BufRead,
    S: Write,
{
    let input = File::open(&config.input).map_err(open_error(&config.input))?;
    let output = File::create(&config.output).map_err(open_error(&config.output))?;

    let reader = AddressReader::new(BufReader::new(input), config.key_field);
    let dict = Dictionary::build(config.stage, reader)?;

    let mut output = BufWriter::new(output);
    let totals = process_queries(&dict, queries, &mut output, summary)?;
    output.flush()?;
    summary.flush()?;

    info!(
        stage = %config.stage,
        queries = totals.queries,
        records = totals.records,
        comparisons = %totals.stats,
        "queries answered"
    );
    Ok(totals)
}
