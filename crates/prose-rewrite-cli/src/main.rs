mod command;

use anyhow::{Context, Result, bail};
use prose_rewrite_config::Config;
use prose_rewrite_engine::{Document, RewriteOutcome, RewriteSession, TextRange};
use std::{env, path::PathBuf, process};

use command::CommandRewriter;

struct Args {
    file: PathBuf,
    selection: TextRange,
    instructions: String,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self> {
        let [_, file, selection, instructions @ ..] = args else {
            bail!("missing arguments");
        };
        if instructions.is_empty() {
            bail!("missing instructions");
        }
        Ok(Self {
            file: PathBuf::from(file),
            selection: parse_selection(selection)?,
            instructions: instructions.join(" "),
        })
    }
}

/// `FROM..TO` for an explicit selection, `@OFFSET` for a caret.
fn parse_selection(s: &str) -> Result<TextRange> {
    if let Some(at) = s.strip_prefix('@') {
        let at = at
            .parse::<usize>()
            .with_context(|| format!("invalid caret offset '{at}'"))?;
        return Ok(TextRange::caret(at));
    }
    let Some((from, to)) = s.split_once("..") else {
        bail!("selection must be FROM..TO or @OFFSET, got '{s}'");
    };
    let from = from
        .parse::<usize>()
        .with_context(|| format!("invalid selection start '{from}'"))?;
    let to = to
        .parse::<usize>()
        .with_context(|| format!("invalid selection end '{to}'"))?;
    Ok(TextRange::new(from, to))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let args = match Args::parse(&argv) {
        Ok(args) => args,
        Err(e) => {
            let bin = argv.first().map(String::as_str).unwrap_or("prose-rewrite");
            eprintln!("Error: {e}");
            eprintln!("Usage: {bin} <file> <FROM..TO|@OFFSET> <instructions...>");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("loading {}", config_path.display()))?
        .unwrap_or_default();
    let Some(rewrite_command) = config.rewrite_command.clone() else {
        eprintln!("Error: no rewrite_command configured");
        eprintln!("Set one in {}", config_path.display());
        process::exit(1);
    };

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let doc = Document::from_bytes(&bytes)
        .with_context(|| format!("{} is not valid UTF-8", args.file.display()))?;

    let mut session = RewriteSession::new(doc).with_preview_chars(config.preview_chars);
    session.set_selection(args.selection)?;

    let target = session.resolve_target()?;
    if target.is_empty() {
        bail!("nothing to rewrite at {}", args.selection);
    }
    log::info!("rewriting {}: {:?}", target.range(), session.preview());

    let rewriter = CommandRewriter::new(rewrite_command);
    match pollster::block_on(session.rewrite_with(&rewriter, &args.instructions))? {
        RewriteOutcome::Applied(patch) => {
            log::info!("applied rewrite, document version {}", patch.version);
        }
        RewriteOutcome::Discarded => bail!("rewrite was discarded"),
    }

    print!("{}", session.document().text());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("3..9", TextRange::new(3, 9))]
    #[case("0..0", TextRange::caret(0))]
    #[case("@17", TextRange::caret(17))]
    fn parses_selections(#[case] input: &str, #[case] expected: TextRange) {
        assert_eq!(parse_selection(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("12")]
    #[case("@x")]
    #[case("3..")]
    #[case("a..4")]
    fn rejects_bad_selections(#[case] input: &str) {
        assert!(parse_selection(input).is_err());
    }

    #[test]
    fn joins_instructions() {
        let args = Args::parse(&argv(&[
            "prose-rewrite",
            "notes.md",
            "@0",
            "Make",
            "it",
            "shorter.",
        ]))
        .unwrap();
        assert_eq!(args.file, PathBuf::from("notes.md"));
        assert_eq!(args.selection, TextRange::caret(0));
        assert_eq!(args.instructions, "Make it shorter.");
    }

    #[test]
    fn requires_instructions() {
        assert!(Args::parse(&argv(&["prose-rewrite", "notes.md", "0..4"])).is_err());
        assert!(Args::parse(&argv(&["prose-rewrite"])).is_err());
    }
}
