use crate::chess::core::Color;

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    SetPlacement { placement: String },
    Initialize { color: Color },
    Clear,
    Put { coordinate: String, symbol: char },
    Remove { coordinate: String },
    Get { coordinate: String },
    Moves { coordinate: String },
    Move { from: String, to: String },
    Draw,
    Placement,
    Quit,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let unknown = || Self::Unknown(input.trim().to_string());

        match parts.as_slice() {
            ["placement", placement] => Self::SetPlacement {
                placement: (*placement).to_string(),
            },
            ["init", color] => match Color::try_from(*color) {
                Ok(color) => Self::Initialize { color },
                Err(_) => unknown(),
            },
            ["clear"] => Self::Clear,
            ["put", coordinate, symbol] => {
                let mut chars = symbol.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Self::Put {
                        coordinate: (*coordinate).to_string(),
                        symbol,
                    },
                    _ => unknown(),
                }
            },
            ["remove", coordinate] => Self::Remove {
                coordinate: (*coordinate).to_string(),
            },
            ["get", coordinate] => Self::Get {
                coordinate: (*coordinate).to_string(),
            },
            ["moves", coordinate] => Self::Moves {
                coordinate: (*coordinate).to_string(),
            },
            ["move", from, to] => Self::Move {
                from: (*from).to_string(),
                to: (*to).to_string(),
            },
            ["d"] => Self::Draw,
            ["fen"] => Self::Placement,
            ["quit"] => Self::Quit,
            _ => unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_placement() {
        assert_eq!(
            Command::parse("placement 8/8/8/8/8/8/8/8"),
            Command::SetPlacement {
                placement: "8/8/8/8/8/8/8/8".to_string()
            }
        );
        assert_eq!(Command::parse("fen"), Command::Placement);
    }

    #[test]
    fn parse_init() {
        assert_eq!(
            Command::parse("init white"),
            Command::Initialize {
                color: Color::White
            }
        );
        assert_eq!(
            Command::parse("init b"),
            Command::Initialize {
                color: Color::Black
            }
        );
        assert_eq!(
            Command::parse("init green"),
            Command::Unknown("init green".to_string())
        );
    }

    #[test]
    fn parse_put() {
        assert_eq!(
            Command::parse("put E4 q"),
            Command::Put {
                coordinate: "E4".to_string(),
                symbol: 'q'
            }
        );
        assert_eq!(
            Command::parse("put E4 qq"),
            Command::Unknown("put E4 qq".to_string())
        );
    }

    #[test]
    fn parse_square_commands() {
        assert_eq!(
            Command::parse("remove A1"),
            Command::Remove {
                coordinate: "A1".to_string()
            }
        );
        assert_eq!(
            Command::parse("get A1"),
            Command::Get {
                coordinate: "A1".to_string()
            }
        );
        assert_eq!(
            Command::parse("moves E7\n"),
            Command::Moves {
                coordinate: "E7".to_string()
            }
        );
        assert_eq!(
            Command::parse("move E7 E5"),
            Command::Move {
                from: "E7".to_string(),
                to: "E5".to_string()
            }
        );
    }

    #[test]
    fn parse_simple() {
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("d"), Command::Draw);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn unknown() {
        assert_eq!(
            Command::parse("unknown command"),
            Command::Unknown("unknown command".to_string())
        );
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
        assert_eq!(
            Command::parse("moves"),
            Command::Unknown("moves".to_string())
        );
    }
}
