use crate::Error;
use lazyseq_core::Source;
use serde_json::Value;
use std::io::{self, Read};

/// Sequence over the elements of a JSON array or object.
pub type Seq = Source<std::vec::IntoIter<(Value, Value)>>;

/// Parse JSON values from the given arguments,
/// or from standard input if no arguments were given.
pub fn values(args: &[String]) -> Result<Vec<Value>, Error> {
    if args.is_empty() {
        return from_read(io::stdin().lock());
    }
    let parse = |(i, s): (usize, &String)| {
        let err = |e: serde_json::Error| Error::Parse(format!("{e} (for argument {})", i + 1));
        serde_json::from_str(s).map_err(err)
    };
    args.iter().enumerate().map(parse).collect()
}

/// Parse whitespace-separated JSON values.
pub fn from_read(read: impl Read) -> Result<Vec<Value>, Error> {
    let values = serde_json::Deserializer::from_reader(io::BufReader::new(read));
    let values = values.into_iter::<Value>();
    values.map(|v| v.map_err(|e| Error::Parse(e.to_string()))).collect()
}

/// Return the elements of an array or object.
///
/// Array elements are keyed by their index, object values by their key.
pub fn pairs(v: Value) -> Result<Vec<(Value, Value)>, Error> {
    Ok(match v {
        Value::Array(a) => a.into_iter().enumerate().map(|(i, x)| (i.into(), x)).collect(),
        Value::Object(o) => o.into_iter().map(|(k, x)| (k.into(), x)).collect(),
        v => return Err(Error::Iter(v)),
    })
}

/// Convert an array or object to a sequence of its elements.
pub fn seq(v: Value) -> Result<Seq, Error> {
    Ok(Source::pairs(pairs(v)?.into_iter()))
}

#[test]
fn parse() {
    use lazyseq_core::Sequence;
    use serde_json::json;

    let vals = from_read(&b"[1, 2] {\"a\": 3}\n\"x\""[..]).unwrap();
    assert_eq!(vals, [json!([1, 2]), json!({"a": 3}), json!("x")]);

    let mut obj = seq(json!({"b": 1, "a": 2})).unwrap();
    assert_eq!(obj.to_pairs(), [(json!("b"), json!(1)), (json!("a"), json!(2))]);
    let mut arr = seq(json!(["x", "y"])).unwrap();
    assert_eq!(arr.to_pairs(), [(json!(0), json!("x")), (json!(1), json!("y"))]);

    assert!(matches!(seq(json!("x")), Err(Error::Iter(_))));
    assert!(matches!(from_read(&b"[1,"[..]), Err(Error::Parse(_))));
}
