//! Loose coercions for provider and caller JSON that mixes numbers, strings, and booleans.

// self
use crate::_prelude::*;

/// Coerces a JSON value into an integer the way the provider's clients historically did.
///
/// Numbers truncate toward zero, strings contribute their leading numeric part, booleans map
/// to `0`/`1`, and anything else becomes `0`.
pub(crate) fn to_int(value: &Value) -> i64 {
	match value {
		Value::Number(n) => n
			.as_i64()
			.or_else(|| n.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX)))
			.or_else(|| n.as_f64().map(|v| v as i64))
			.unwrap_or(0),
		Value::String(s) => str_to_int(s),
		Value::Bool(b) => i64::from(*b),
		_ => 0,
	}
}

/// Loose truthiness: `false`, `null`, `0`, `""`, `"0"`, `[]`, and `{}` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.),
		Value::String(s) => !s.is_empty() && s != "0",
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
	}
}

/// Returns a short name for the JSON kind of `value`.
pub(crate) fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn str_to_int(raw: &str) -> i64 {
	let trimmed = raw.trim();

	if let Ok(v) = trimmed.parse::<i64>() {
		return v;
	}
	if let Some(v) = trimmed.parse::<f64>().ok().filter(|v| v.is_finite()) {
		return v as i64;
	}

	let sign_len = usize::from(trimmed.starts_with(['-', '+']));
	let digits_len = trimmed[sign_len..].bytes().take_while(u8::is_ascii_digit).count();

	trimmed[..sign_len + digits_len].parse().unwrap_or(0)
}

/// Serde adapter: lenient integer.
pub(crate) fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Value::deserialize(deserializer).map(|value| to_int(&value))
}

/// Serde adapter: lenient truthiness.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

/// Serde adapter: numbers pass through, numeric strings are parsed, anything else is `0`.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<serde_json::Number, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	let number = match value {
		Value::Number(n) => n,
		Value::String(s) => {
			let s = s.trim();

			s.parse::<i64>()
				.map(serde_json::Number::from)
				.ok()
				.or_else(|| s.parse::<f64>().ok().and_then(serde_json::Number::from_f64))
				.unwrap_or_else(|| serde_json::Number::from(0))
		},
		other => to_int(&other).into(),
	};

	Ok(number)
}

/// Serde adapter: lenient string. Numbers and booleans are rendered, `null` becomes `""`.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	let text = match value {
		Value::String(s) => s,
		Value::Null => String::new(),
		Value::Bool(true) => "1".into(),
		Value::Bool(false) => String::new(),
		other => other.to_string(),
	};

	Ok(text)
}
