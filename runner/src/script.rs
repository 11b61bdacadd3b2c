use snake_engine::Direction;

/// One entry per tick: the turn to request before that tick, if any.
pub type Script = Vec<Option<Direction>>;

/// Parses `U`, `D`, `L`, `R` (any case) as turns and `.` as "no turn".
/// Whitespace is ignored so long scripts can be wrapped.
pub fn parse_script(text: &str) -> Result<Script, String> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(tick, c)| match c {
            '.' => Ok(None),
            _ => Direction::from_char(c)
                .map(Some)
                .ok_or_else(|| format!("Invalid script character '{}' at tick {}", c, tick)),
        })
        .collect()
}
