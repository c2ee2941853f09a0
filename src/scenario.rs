use std::io::Write;

use collections::HashTable;
use log::{debug, info};

use crate::{DemoConfig, DemoError};

const LINES: [(&str, &str); 3] = [
    ("line_1", "Tiny hash table\n"),
    ("line_2", "Filled beyond capacity\n"),
    ("line_3", "Linked list saves the day!\n"),
];

/// Fills a table with `key-i`/`val-i` pairs, removes them again newest first
/// and reports whether `key-0` is gone.
pub fn fill_and_drain<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    let mut ht = HashTable::create(config.initial_capacity)?;

    for i in 0..config.key_count {
        ht.insert(format!("key-{i}"), format!("val-{i}"));
    }
    info!(
        "inserted {} keys into {} buckets, load factor {:.2}",
        ht.len(),
        ht.capacity(),
        ht.load_factor()
    );

    for i in (0..config.key_count).rev() {
        ht.remove(&format!("key-{i}"))?;
    }
    debug!("{ht:?}");

    match ht.retrieve("key-0") {
        None => writeln!(out, "IS NULL")?,
        Some(v) => writeln!(out, "value is {v}")?,
    }

    ht.destroy();
    Ok(())
}

/// Overfills a two bucket table, then doubles it and shows nothing got lost.
pub fn grow<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let mut ht = HashTable::create(2)?;
    for (k, v) in LINES {
        ht.insert(k, v);
    }

    print_lines(&ht, out)?;

    let old_capacity = ht.capacity();
    ht.resize()?;
    let new_capacity = ht.capacity();
    writeln!(out, "\nResizing hash table from {old_capacity} to {new_capacity}.")?;
    info!("load factor down to {:.2}", ht.load_factor());

    print_lines(&ht, out)?;

    ht.destroy();
    Ok(())
}

fn print_lines<W: Write>(ht: &HashTable, out: &mut W) -> Result<(), DemoError> {
    for (k, _) in LINES {
        write!(out, "{}", ht.retrieve(k).unwrap_or_default())?;
    }
    Ok(())
}
