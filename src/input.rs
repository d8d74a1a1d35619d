//! Loading address lists for the command-line tool.

use crate::cli::ListArgs;
use crate::error::AddressError;
use crate::models::{Address, AddressFamily};
use std::error::Error;
use std::path::Path;

/// Read a JSON array of address strings.
///
/// # Returns
/// * `Ok(Vec<String>)` - The raw address texts, in file order
/// * `Err` - If the file can't be read or isn't an array of strings
pub fn read_address_file(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading address file {}: {e}", path.display()))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let list: Vec<String> = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing address file {}: path={} error={}",
            path.display(),
            e.path(),
            e
        )
    })?;

    log::info!("Read {} addresses from {}", list.len(), path.display());
    Ok(list)
}

/// Command-line addresses followed by those from `--file`.
pub fn collect_inputs(list: &ListArgs) -> Result<Vec<String>, Box<dyn Error>> {
    let mut inputs = list.addresses.clone();
    if let Some(path) = &list.file {
        inputs.extend(read_address_file(path)?);
    }
    Ok(inputs)
}

/// Parse every input as family `F`, failing on the first bad one.
pub fn parse_all<F: AddressFamily>(inputs: &[String]) -> Result<Vec<Address<F>>, AddressError> {
    inputs.iter().map(|text| Address::parse(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4, V4, V6};
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ip-subnet-calc-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, content).expect("Error writing temp file");
        path
    }

    #[test]
    fn test_read_address_file() {
        let path = write_temp("ok.json", r#"["10.0.0.1/24", "10.0.0.4/24"]"#);
        let list = read_address_file(&path).unwrap();
        assert_eq!(list, vec!["10.0.0.1/24", "10.0.0.4/24"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_address_file_names_bad_element() {
        let path = write_temp("bad.json", r#"["10.0.0.1/24", 7]"#);
        let err = read_address_file(&path).unwrap_err().to_string();
        assert!(err.contains("path=[1]"), "unexpected error: {err}");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_address_file_missing() {
        let err = read_address_file(Path::new("no/such/file.json")).unwrap_err();
        assert!(err.to_string().starts_with("Error reading address file"));
    }

    #[test]
    fn test_collect_inputs() {
        let path = write_temp("extra.json", r#"["10.0.0.9/24"]"#);
        let list = ListArgs {
            addresses: vec!["10.0.0.1/24".to_string()],
            file: Some(path.clone()),
        };
        assert_eq!(
            collect_inputs(&list).unwrap(),
            vec!["10.0.0.1/24", "10.0.0.9/24"]
        );
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_all() {
        let inputs = vec!["10.0.0.1/24".to_string(), "10.0.0.2".to_string()];
        let parsed = parse_all::<V4>(&inputs).unwrap();
        assert_eq!(parsed[0], Ipv4::parse("10.0.0.1").unwrap());
        assert_eq!(parsed[1].prefix_len(), 32);
        assert!(parse_all::<V6>(&inputs).is_err());
    }
}
