use crate::error::InputError;

const DELIMETERS: [char; 2] = [',', '|'];

/// Parses a list of numbers separated by `,` or `|`.
///
/// Whitespace is ignored anywhere in the input. Commas take precedence when both
/// delimeters show up, and input without any delimeter is read as a single number.
pub fn parse_values(input: &str) -> Result<Vec<f64>, InputError> {
    let content = input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>();

    if content.is_empty() {
        return Err(InputError::Empty);
    }

    match DELIMETERS
        .iter()
        .find(|delimeter| content.contains(**delimeter))
    {
        Some(delimeter) => content.split(*delimeter).map(parse_value).collect(),
        None => Ok(vec![parse_value(&content)?]),
    }
}

fn parse_value(value: &str) -> Result<f64, InputError> {
    let number = value
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(value.to_string()))?;

    // NaN and the infinities don't have a total order against the other values
    if !number.is_finite() {
        return Err(InputError::NotFinite(value.to_string()));
    }

    Ok(number)
}
