use std::path::PathBuf;

use clap::Parser;
use pogo_subset::config::{
    SourceUrls, DEFAULT_ID_BLOCK, DEFAULT_INDEX_PATH, DEFAULT_OUTPUT_PATH, EN_NAMES_URL,
    GAME_MASTER_URL, KO_NAMES_URL,
};
use pogo_subset::output::read_text;
use pogo_subset::{FormSelection, PipelineOptions};

/// Build Pokemon GO subset mapping with stats and a name index.
#[derive(Parser, Debug)]
#[command(name = "build-subset", version)]
pub struct Cli {
    /// Comma/space-separated ids and ranges (e.g. "1, 3-5, 10")
    #[arg(long, conflicts_with = "ids_file")]
    pub ids: Option<String>,

    /// Text file with one id or range per line
    #[arg(long)]
    pub ids_file: Option<PathBuf>,

    /// Output JSON path for the full mapping
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Output JSON path for the name index
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    pub index_output: PathBuf,

    /// Emit only a single default/NORMAL-like form per species
    #[arg(long)]
    pub only_normal: bool,

    /// Lowercase keys in the name index
    #[arg(long)]
    pub lc_keys: bool,

    /// Game Master snapshot URL
    #[arg(long, env = "POGO_GAME_MASTER_URL", default_value = GAME_MASTER_URL)]
    pub game_master_url: String,

    /// English name list URL
    #[arg(long, env = "POGO_EN_NAMES_URL", default_value = EN_NAMES_URL)]
    pub en_url: String,

    /// Korean name list URL
    #[arg(long, env = "POGO_KO_NAMES_URL", default_value = KO_NAMES_URL)]
    pub ko_url: String,
}

impl Cli {
    /// The id block to parse: file contents, inline ids, or the default range.
    ///
    /// A blank `--ids` counts as not given.
    pub fn id_block(&self) -> pogo_subset::Result<String> {
        let inline = self.ids.as_deref().filter(|ids| !ids.trim().is_empty());
        if let Some(path) = &self.ids_file {
            read_text(path)
        } else if let Some(ids) = inline {
            Ok(ids.to_string())
        } else {
            Ok(DEFAULT_ID_BLOCK.to_string())
        }
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            selection: if self.only_normal {
                FormSelection::Canonical
            } else {
                FormSelection::AllForms
            },
            lowercase_keys: self.lc_keys,
        }
    }

    pub fn sources(&self) -> SourceUrls {
        SourceUrls {
            game_master: self.game_master_url.clone(),
            english: self.en_url.clone(),
            korean: self.ko_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("build-subset").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cli.index_output, PathBuf::from(DEFAULT_INDEX_PATH));
        assert_eq!(cli.id_block().unwrap(), DEFAULT_ID_BLOCK);
        assert_eq!(cli.pipeline_options().selection, FormSelection::AllForms);
        assert!(!cli.pipeline_options().lowercase_keys);
    }

    #[test]
    fn test_ids_and_ids_file_conflict() {
        let err = parse(&["--ids", "1-3", "--ids-file", "ids.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_inline_ids_become_block() {
        let cli = parse(&["--ids", "1, 3-5, 10", "--only-normal", "--lc-keys", "-o", "out.json"]).unwrap();
        assert_eq!(cli.id_block().unwrap(), "1, 3-5, 10");
        let options = cli.pipeline_options();
        assert_eq!(options.selection, FormSelection::Canonical);
        assert!(options.lowercase_keys);
        assert_eq!(cli.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_blank_ids_fall_back_to_default_block() {
        for blank in ["", "   "] {
            let cli = parse(&["--ids", blank]).unwrap();
            assert_eq!(cli.id_block().unwrap(), DEFAULT_ID_BLOCK);
        }
    }

    #[test]
    fn test_ids_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "1-3\n25\n").unwrap();
        let cli = parse(&["--ids-file", path.to_str().unwrap()]).unwrap();
        assert_eq!(cli.id_block().unwrap(), "1-3\n25\n");
    }

    #[test]
    fn test_source_url_override() {
        let cli = parse(&["--en-url", "http://localhost:8000/en.json"]).unwrap();
        let sources = cli.sources();
        assert_eq!(sources.english, "http://localhost:8000/en.json");
        assert_eq!(sources.korean, KO_NAMES_URL);
    }
}
