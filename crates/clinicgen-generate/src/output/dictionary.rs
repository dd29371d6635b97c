use std::path::Path;

/// The data dictionary shipped next to the CSV files. Fixed text describing
/// schema, relationships, and suggested measures; not derived from the
/// generated data.
pub const DATA_DICTIONARY: &str = include_str!("../../assets/data_dictionary.md");

pub const DATA_DICTIONARY_FILE: &str = "DataDictionary.md";

pub fn write_data_dictionary(out_dir: &Path) -> std::io::Result<u64> {
    let path = out_dir.join(DATA_DICTIONARY_FILE);
    std::fs::write(&path, DATA_DICTIONARY)?;
    Ok(DATA_DICTIONARY.len() as u64)
}
