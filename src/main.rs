use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt};

use wordnet::render::render_lookup;
use wordnet::{EngineConfig, Synset, WordNet};

#[derive(Parser)]
#[command(version, about = "WordNet lookup: senses, glosses and related synsets")]
struct Cli {
    /// Каталог базы: index.{adj,adv,noun,verb} и data.{adj,adv,noun,verb}
    #[arg(long, global = true, env = "WORDNET_DB", default_value = "db")]
    db: PathBuf,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Найти слово (несколько аргументов склеиваются через пробел)
    Lookup {
        #[arg(required = true)]
        word: Vec<String>,
        /// Не разыменовывать указатели
        #[arg(long, default_value_t = false)]
        skip_pointers: bool,
        /// Все значения, а не только первое в каждой части речи
        #[arg(long, default_value_t = false)]
        all_senses: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Все леммы базы
    List {
        /// Только количество
        #[arg(long, default_value_t = false)]
        count: bool,
    },
    /// Интерактивный режим, `:q` для выхода
    Repl {
        #[arg(long, default_value_t = false)]
        skip_pointers: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = EngineConfig::from_env().with_db_dir(cli.db);
    let wn = WordNet::init_with(config).await?;

    let code = match cli.cmd {
        Cmd::Lookup {
            word,
            skip_pointers,
            all_senses,
            json,
        } => {
            let word = word.join(" ");
            match lookup(&wn, &word, skip_pointers, all_senses).await? {
                Some(synsets) if json => {
                    println!("{}", serde_json::to_string_pretty(&synsets)?);
                    ExitCode::SUCCESS
                }
                Some(synsets) => {
                    print!("{}", render_lookup(&word, &synsets));
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no definition for {word}");
                    ExitCode::from(1)
                }
            }
        }
        Cmd::List { count } => {
            let lemmas = wn.list().await?;
            if count {
                println!("{}", lemmas.len());
            } else {
                let mut out = std::io::stdout().lock();
                for l in lemmas {
                    writeln!(out, "{l}")?;
                }
            }
            ExitCode::SUCCESS
        }
        Cmd::Repl { skip_pointers } => {
            repl(&wn, skip_pointers).await?;
            ExitCode::SUCCESS
        }
    };

    wn.close();
    Ok(code)
}

/// `None`, если слова нет в базе; остальные ошибки наверх.
async fn lookup(
    wn: &WordNet,
    word: &str,
    skip_pointers: bool,
    all_senses: bool,
) -> Result<Option<Vec<Synset>>> {
    let res = if all_senses {
        wn.lookup_senses(word, skip_pointers).await
    } else {
        wn.lookup(word, skip_pointers).await
    };
    match res {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn repl(wn: &WordNet, skip_pointers: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("wordnet> ");
        std::io::stdout().flush().ok();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        if s == ":q" || s == ":quit" {
            break;
        }
        match lookup(wn, s, skip_pointers, false).await {
            Ok(Some(synsets)) => print!("{}", render_lookup(s, &synsets)),
            Ok(None) => println!("no definition for {s}"),
            Err(e) => println!("error: {e:#}"),
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
