use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::{Coord, Coord2};

/// One scripted player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Open(Coord2),
    Mark(Coord2),
    Restart,
    NewGame,
}

impl FromStr for Move {
    type Err = anyhow::Error;

    /// Accepts `open 3 4`, `mark 3 4`, `restart` and `new`, with `:` or `,` also separating.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s
            .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
            .filter(|word| !word.is_empty());

        let Some(action) = words.next() else {
            bail!("empty move");
        };

        let parsed = match action.to_ascii_lowercase().as_str() {
            "open" | "o" => Move::Open(coords(&mut words)?),
            "mark" | "m" => Move::Mark(coords(&mut words)?),
            "restart" => Move::Restart,
            "new" => Move::NewGame,
            other => bail!("unknown action {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after {action}");
        }
        Ok(parsed)
    }
}

fn coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |name: &str| -> anyhow::Result<Coord> {
        let word = words.next().with_context(|| format!("missing {name}"))?;
        word.parse().with_context(|| format!("invalid {name} {word:?}"))
    };
    let row = next("row")?;
    let col = next("col")?;
    Ok((row, col))
}

/// Parses a script, one move per line, ignoring blank lines and `#` comments.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<Move>> {
    script
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| line.parse::<Move>().with_context(|| format!("line {line_no}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_separators() {
        assert_eq!("open 3 4".parse::<Move>().unwrap(), Move::Open((3, 4)));
        assert_eq!("o:3,4".parse::<Move>().unwrap(), Move::Open((3, 4)));
        assert_eq!("MARK 0 7".parse::<Move>().unwrap(), Move::Mark((0, 7)));
        assert_eq!("restart".parse::<Move>().unwrap(), Move::Restart);
        assert_eq!("new".parse::<Move>().unwrap(), Move::NewGame);
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!("".parse::<Move>().is_err());
        assert!("open 3".parse::<Move>().is_err());
        assert!("open 3 x".parse::<Move>().is_err());
        assert!("open 3 4 5".parse::<Move>().is_err());
        assert!("jump 1 1".parse::<Move>().is_err());
        assert!("open 300 1".parse::<Move>().is_err());
    }

    #[test]
    fn script_skips_comments_and_reports_lines() {
        let moves = parse_script("# opening\nopen 4 4\n\nmark 0 0 # corner\n").unwrap();
        assert_eq!(moves, [Move::Open((4, 4)), Move::Mark((0, 0))]);

        let err = parse_script("open 1 1\nfly 2 2\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
    }
}
