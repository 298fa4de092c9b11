use tracing::debug;

use crate::model::{DomainRecord, InterproRef, Location, Match};
use crate::util::{clip, Filtered};

const DISPLAY_NAME_CHARS: usize = 5;
const DISPLAY_NAME_SUFFIX: &str = "...";
const IPR_NAME_CHARS: usize = 2;
const IPR_TYPE: &str = "Domain";

/// Two-character accession prefix for a database name (`PFAM` -> `PF`).
pub fn accession_prefix(db: &str) -> &str {
    match db.char_indices().nth(2) {
        Some((cut, _)) => &db[..cut],
        None => db,
    }
}

/// Keep the hits whose accession belongs to `db` and reshape them into
/// renderer matches.
pub fn normalize_domains(raw: &[DomainRecord], db: &str) -> Filtered<Match> {
    let prefix = accession_prefix(db);
    let filtered = Filtered::partition(raw.iter(), |record| record.database.starts_with(prefix))
        .map(|record| to_match(record, db));

    debug!(
        "Found {} domains, filtered down to {}",
        filtered.total(),
        filtered.kept.len()
    );
    filtered
}

fn to_match(record: &DomainRecord, db: &str) -> Match {
    Match {
        name: clip(&record.name, DISPLAY_NAME_CHARS, DISPLAY_NAME_SUFFIX),
        full_name: record.name.clone(),
        locations: vec![Location {
            start: record.start,
            end: record.end,
        }],
        dbname: db.to_string(),
        ipr: InterproRef {
            kind: IPR_TYPE.to_string(),
            id: record.interpro_id.clone(),
            name: clip(&record.name, IPR_NAME_CHARS, ""),
        },
        id: record.database.clone(),
    }
}

/// Keep the matches whose `dbname` is exactly `db`.
///
/// Applied after [`normalize_domains`] with the same `db` this is a no-op.
pub fn filter_matches_by_db(matches: Vec<Match>, db: &str) -> Vec<Match> {
    matches.into_iter().filter(|m| m.dbname == db).collect()
}
