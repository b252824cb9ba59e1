//! Positional grouping of flat sample arrays.
//!
//! CZML does not tag array shape: a flat array of numbers is either one
//! constant tuple or a repetition of time-tagged groups, and only the
//! length tells them apart. With `k` the tuple arity, an array of `n`
//! elements decodes as `n / (k + 1)` timed groups when `n` is a positive
//! multiple of `k + 1`, as a single untimed tuple when `n == k`, and is
//! malformed otherwise. The timed check runs first, so e.g. four numbers
//! at arity 3 are one timed group, not an error.

use serde_json::Value;

use crate::error::DecodeError;
use crate::time::TimeValue;

/// A fixed-arity tuple that can be read from and written to a run of
/// JSON values inside a flat sample array.
pub trait SampleTuple: Sized {
    /// Number of wire values one tuple occupies, excluding the time tag.
    const ARITY: usize;
    /// Wire-facing name used in diagnostics.
    const NAME: &'static str;

    /// Read one tuple from exactly `ARITY` values.
    fn read(values: &[Value]) -> Result<Self, DecodeError>;

    /// Append this tuple's `ARITY` values to `out`.
    fn write(&self, out: &mut Vec<Value>);
}

/// One sample: an optional time tag and a payload tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    pub time: Option<TimeValue>,
    pub data: T,
}

impl<T> Sample<T> {
    pub fn new(time: Option<TimeValue>, data: T) -> Self {
        Self { time, data }
    }

    pub fn constant(data: T) -> Self {
        Self { time: None, data }
    }

    pub fn at(time: impl Into<TimeValue>, data: T) -> Self {
        Self {
            time: Some(time.into()),
            data,
        }
    }
}

/// Decode a flat JSON array into a sample sequence of `T`.
pub fn decode_samples<T: SampleTuple>(v: &Value) -> Result<Vec<Sample<T>>, DecodeError> {
    let arr = v.as_array().ok_or(DecodeError::ShapeMismatch(T::NAME))?;
    let n = arr.len();
    let k = T::ARITY;

    if n >= k + 1 && n % (k + 1) == 0 {
        let mut samples = Vec::with_capacity(n / (k + 1));
        for group in arr.chunks(k + 1) {
            let time = TimeValue::from_json(&group[0])?;
            let data = T::read(&group[1..])?;
            samples.push(Sample::new(Some(time), data));
        }
        return Ok(samples);
    }
    if n == k {
        return Ok(vec![Sample::constant(T::read(arr)?)]);
    }
    Err(DecodeError::MalformedSampleArray { len: n, arity: k })
}

/// Encode a sample sequence back to its flat array form.
///
/// The first sample decides whether time tags are written; the choice is
/// applied uniformly. A single untimed tuple flattens to its bare values,
/// and a lone value (arity 1) collapses to a bare scalar.
pub fn encode_samples<T: SampleTuple>(samples: &[Sample<T>]) -> Value {
    let timed = samples.first().is_some_and(|s| s.time.is_some());
    let mut flat = Vec::with_capacity(samples.len() * (T::ARITY + 1));
    for sample in samples {
        if timed {
            let time = match &sample.time {
                Some(t) => t.to_json(),
                None => Value::Null,
            };
            flat.push(time);
        }
        sample.data.write(&mut flat);
    }
    if !timed && samples.len() == 1 && flat.len() == 1 {
        return flat.pop().unwrap_or(Value::Null);
    }
    Value::Array(flat)
}

/// Read one `f64` out of a sample group. Exposed for [`SampleTuple`]
/// implementations outside this crate.
pub fn read_f64(v: &Value, name: &'static str) -> Result<f64, DecodeError> {
    v.as_f64().ok_or(DecodeError::ShapeMismatch(name))
}

impl SampleTuple for f64 {
    const ARITY: usize = 1;
    const NAME: &'static str = "number";

    fn read(values: &[Value]) -> Result<Self, DecodeError> {
        read_f64(&values[0], Self::NAME)
    }

    fn write(&self, out: &mut Vec<Value>) {
        out.push(crate::time::json_number(*self));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Cartesian;
    use serde_json::json;

    #[test]
    fn bare_tuple_when_length_equals_arity() {
        let samples: Vec<Sample<Cartesian>> = decode_samples(&json!([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(samples, vec![Sample::constant(Cartesian::new(1.0, 2.0, 3.0))]);
    }

    #[test]
    fn timed_groups_when_length_is_a_multiple() {
        let samples: Vec<Sample<Cartesian>> =
            decode_samples(&json!(["2020-01-01T00:00:00Z", 1.0, 2.0, 3.0])).unwrap();
        assert_eq!(
            samples,
            vec![Sample::at("2020-01-01T00:00:00Z", Cartesian::new(1.0, 2.0, 3.0))]
        );

        let samples: Vec<Sample<Cartesian>> =
            decode_samples(&json!([0.0, 1.0, 2.0, 3.0, 60.0, 4.0, 5.0, 6.0])).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].time, Some(TimeValue::Epoch(60.0)));
        assert_eq!(samples[1].data, Cartesian::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn timed_interpretation_wins_at_the_boundary() {
        // Four numbers at arity 3: the modulus check runs first, so this is
        // one timed group, not a malformed array.
        let samples: Vec<Sample<Cartesian>> = decode_samples(&json!([1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(
            samples,
            vec![Sample::at(1.0, Cartesian::new(2.0, 3.0, 4.0))]
        );
    }

    #[test]
    fn leftover_lengths_are_malformed() {
        let err = decode_samples::<Cartesian>(&json!([1.0, 2.0])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedSampleArray { len: 2, arity: 3 }
        ));
        // Six numbers at arity 3: not a multiple of 4 and not a bare tuple.
        let err = decode_samples::<Cartesian>(&json!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedSampleArray { len: 6, arity: 3 }
        ));
        assert!(decode_samples::<Cartesian>(&json!([])).is_err());
    }

    #[test]
    fn single_untimed_tuple_collapses_on_encode() {
        let v = encode_samples(&[Sample::constant(Cartesian::new(1.0, 2.0, 3.0))]);
        assert_eq!(v, json!([1.0, 2.0, 3.0]));

        let v = encode_samples(&[Sample::constant(2.5)]);
        assert_eq!(v, json!(2.5));
    }

    #[test]
    fn timed_sequences_flatten_with_time_first() {
        let v = encode_samples(&[
            Sample::at(0.0, Cartesian::new(1.0, 2.0, 3.0)),
            Sample::at(60.0, Cartesian::new(4.0, 5.0, 6.0)),
        ]);
        assert_eq!(v, json!([0.0, 1.0, 2.0, 3.0, 60.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn number_samples_group_in_pairs() {
        let samples: Vec<Sample<f64>> = decode_samples(&json!([0.0, 1.0, 30.0, 2.0])).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].data, 1.0);
        assert_eq!(encode_samples(&samples), json!([0.0, 1.0, 30.0, 2.0]));
    }
}
