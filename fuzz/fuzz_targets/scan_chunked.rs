#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use gamesbuf_decoder::{DecodeError, ScanStatus, Scanner};
use gamesbuf_types::{Entry, Md5, Query};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    stream: Vec<u8>,
    cuts: Vec<u16>,
    query_hash: [u8; 16],
    system: Option<u8>,
    region: Option<u8>,
}

fn build_query(input: &FuzzInput) -> Query {
    let mut query = Query::new(Md5::new(input.query_hash));
    if let Some(system) = input.system {
        query = query.with_system(system);
    }
    if let Some(region) = input.region {
        query = query.with_region(region);
    }
    query
}

fn scan_whole(bytes: &[u8], query: Query) -> Result<Vec<Entry>, DecodeError> {
    let mut scanner = Scanner::new(vec![query]);
    if scanner.push(bytes)? == ScanStatus::Complete {
        return Ok(scanner.into_matches());
    }
    scanner.finish()
}

fn scan_chunks(bytes: &[u8], bounds: &[usize], query: Query) -> Result<Vec<Entry>, DecodeError> {
    let mut scanner = Scanner::new(vec![query]);
    let mut start = 0;
    for &end in bounds {
        if scanner.push(&bytes[start..end])? == ScanStatus::Complete {
            return Ok(scanner.into_matches());
        }
        start = end;
    }
    if scanner.push(&bytes[start..])? == ScanStatus::Complete {
        return Ok(scanner.into_matches());
    }
    scanner.finish()
}

// Fuzz target: chunked scanning is equivalent to whole-buffer scanning.
//
// Slices an arbitrary byte stream at arbitrary positions and requires the
// resumable scanner to reach the same outcome as a single push, whether
// that outcome is a match list or an error.
// Catches bugs in:
// - State carried across chunk boundaries (cursor, target length, skips)
// - Early termination firing at different points per slicing
// - Truncation accounting after partial entries
fuzz_target!(|input: FuzzInput| {
    let query = build_query(&input);

    let mut bounds: Vec<usize> = input
        .cuts
        .iter()
        .map(|&cut| usize::from(cut) % (input.stream.len() + 1))
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let whole = scan_whole(&input.stream, query.clone());
    let chunked = scan_chunks(&input.stream, &bounds, query);

    match (whole, chunked) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(format!("{a:?}"), format!("{b:?}")),
        (a, b) => panic!("chunking changed the outcome: {a:?} vs {b:?}"),
    }
});
