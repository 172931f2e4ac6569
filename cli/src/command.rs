use anyhow::{anyhow, bail, Context};

pub const USAGE: &str = "\
usage: catalog <command>

commands:
  list [--page N] [--query PREFIX]   browse characters
  show <id>                          character details
  favorites                          list favorited characters
  add <id> | remove <id> | toggle <id>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { page: u32, query: String },
    Show { id: u64 },
    Favorites,
    Add { id: u64 },
    Remove { id: u64 },
    Toggle { id: u64 },
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or_else(|| anyhow!("missing command"))?;
        match name.as_str() {
            "list" => {
                let mut page = 1;
                let mut query = String::new();
                while let Some(flag) = args.next() {
                    let value = args
                        .next()
                        .with_context(|| format!("{flag} needs a value"))?;
                    match flag.as_str() {
                        "--page" => {
                            page = value
                                .parse()
                                .ok()
                                .filter(|p: &u32| *p >= 1)
                                .with_context(|| format!("invalid page: {value}"))?
                        }
                        "--query" => query = value,
                        other => bail!("unknown option: {other}"),
                    }
                }
                Ok(Command::List { page, query })
            }
            "show" => Ok(Command::Show { id: parse_id(args.next())? }),
            "favorites" => Ok(Command::Favorites),
            "add" => Ok(Command::Add { id: parse_id(args.next())? }),
            "remove" => Ok(Command::Remove { id: parse_id(args.next())? }),
            "toggle" => Ok(Command::Toggle { id: parse_id(args.next())? }),
            other => bail!("unknown command: {other}"),
        }
    }
}

fn parse_id(arg: Option<String>) -> Result<u64, anyhow::Error> {
    let raw = arg.ok_or_else(|| anyhow!("missing character id"))?;
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => bail!("invalid character id: {raw}"),
    }
}
