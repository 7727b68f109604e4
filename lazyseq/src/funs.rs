use crate::cli::Combiner;
use crate::Error;
use serde_json::{Number, Value};

pub type ValR = Result<Value, Error>;

#[derive(Copy, Clone, Debug)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn from_val(v: &Value) -> Option<Self> {
        v.as_i64().map(Num::Int).or_else(|| v.as_f64().map(Num::Float))
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Apply `int` if both numbers are integers and `int` does not overflow, else `float`.
    fn op(self, r: Self, int: fn(i64, i64) -> Option<i64>, float: fn(f64, f64) -> f64) -> Self {
        match (self, r) {
            (Self::Int(l), Self::Int(r)) => int(l, r)
                .map(Self::Int)
                .unwrap_or_else(|| Self::Float(float(l as f64, r as f64))),
            (l, r) => Self::Float(float(l.as_f64(), r.as_f64())),
        }
    }
}

impl From<Num> for Value {
    fn from(n: Num) -> Self {
        match n {
            Num::Int(i) => i.into(),
            // NaN and infinity cannot be represented in JSON
            Num::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }
}

fn nums(name: &'static str, xs: &[Value]) -> Result<Vec<Num>, Error> {
    let err = || Error::Combine(name, Value::Array(xs.to_vec()));
    xs.iter().map(|x| Num::from_val(x).ok_or_else(err)).collect()
}

impl Combiner {
    /// Number of values that the combiner takes, if it is fixed.
    pub fn arity(self) -> Option<usize> {
        match self {
            Self::Sub | Self::Div => Some(2),
            _ => None,
        }
    }

    /// Merge any number of values.
    pub fn fold(self, xs: Vec<Value>) -> ValR {
        type Int = fn(i64, i64) -> Option<i64>;
        let fold = |name: &'static str, init, int: Int, float: fn(f64, f64) -> f64| -> ValR {
            let ns = nums(name, &xs)?;
            Ok(ns.into_iter().fold(Num::Int(init), |acc, n| acc.op(n, int, float)).into())
        };
        let pick = |name: &'static str, better: fn(f64, f64) -> bool| -> ValR {
            let ns = nums(name, &xs)?;
            let best = ns.iter().enumerate().reduce(|best, x| {
                if better(x.1.as_f64(), best.1.as_f64()) {
                    x
                } else {
                    best
                }
            });
            Ok(best.map_or(Value::Null, |(i, _)| xs[i].clone()))
        };
        match self {
            Self::Sum => fold("add", 0, i64::checked_add, |l, r| l + r),
            Self::Product => fold("multiply", 1, i64::checked_mul, |l, r| l * r),
            Self::Min => pick("take minimum of", |x, best| x < best),
            Self::Max => pick("take maximum of", |x, best| x > best),
            Self::Concat => concat(xs),
            Self::Sub | Self::Div => match <[Value; 2]>::try_from(xs) {
                Ok(lr) => self.binary(lr),
                Err(xs) => Err(Error::Combine("apply binary operator to", Value::Array(xs))),
            },
        }
    }

    /// Merge exactly two values.
    pub fn binary(self, [l, r]: [Value; 2]) -> ValR {
        let name = match self {
            Self::Sub => "subtract",
            Self::Div => "divide",
            _ => return self.fold(Vec::from([l, r])),
        };
        let lr = [l, r];
        let ns = nums(name, &lr)?;
        let (l, r) = (ns[0], ns[1]);
        Ok(match self {
            Self::Sub => l.op(r, i64::checked_sub, |l, r| l - r).into(),
            _ if r.as_f64() == 0.0 => return Err(Error::Combine(name, Value::Array(lr.into()))),
            _ => l.op(r, exact_div, |l, r| l / r).into(),
        })
    }
}

/// Divide integers if the result is an integer.
fn exact_div(l: i64, r: i64) -> Option<i64> {
    (l.checked_rem(r)? == 0).then(|| l / r)
}

fn concat(xs: Vec<Value>) -> ValR {
    if xs.iter().all(Value::is_string) {
        let strs = xs.iter().filter_map(Value::as_str);
        Ok(Value::String(strs.collect()))
    } else if xs.iter().all(Value::is_array) {
        let arrs = xs.into_iter().filter_map(|x| match x {
            Value::Array(a) => Some(a),
            _ => None,
        });
        Ok(Value::Array(arrs.flatten().collect()))
    } else {
        Err(Error::Combine("concatenate", Value::Array(xs)))
    }
}

#[test]
fn arith() {
    use serde_json::json;
    let fold = |c: Combiner, v: Value| match v {
        Value::Array(xs) => c.fold(xs).unwrap(),
        _ => panic!(),
    };
    assert_eq!(fold(Combiner::Sum, json!([1, 2, 3])), json!(6));
    assert_eq!(fold(Combiner::Sum, json!([1, 0.5])), json!(1.5));
    assert_eq!(fold(Combiner::Sum, json!([])), json!(0));
    assert_eq!(fold(Combiner::Product, json!([2, 3, 4])), json!(24));
    assert_eq!(fold(Combiner::Sum, json!([i64::MAX, 1])), json!(i64::MAX as f64 + 1.0));
    assert_eq!(fold(Combiner::Min, json!([3, 1.5, 2])), json!(1.5));
    assert_eq!(fold(Combiner::Max, json!([3, 1.5, 2])), json!(3));
    assert_eq!(fold(Combiner::Max, json!([])), json!(null));
    assert_eq!(fold(Combiner::Sub, json!([5, 7])), json!(-2));
    assert_eq!(fold(Combiner::Div, json!([6, 3])), json!(2));
    assert_eq!(fold(Combiner::Div, json!([1, 2])), json!(0.5));
}

#[test]
fn concat_and_errors() {
    use serde_json::json;
    let c = Combiner::Concat;
    assert_eq!(c.fold(vec![json!("ab"), json!("c")]).unwrap(), json!("abc"));
    assert_eq!(c.fold(vec![json!([1]), json!([2, 3])]).unwrap(), json!([1, 2, 3]));

    let err = c.fold(vec![json!("a"), json!([1])]).unwrap_err();
    assert_eq!(err.to_string(), r#"cannot concatenate ["a",[1]]"#);
    let err = Combiner::Sum.fold(vec![json!(1), json!("a")]).unwrap_err();
    assert_eq!(err.to_string(), r#"cannot add [1,"a"]"#);
    let err = Combiner::Div.binary([json!(1), json!(0)]).unwrap_err();
    assert_eq!(err.to_string(), "cannot divide [1,0]");
}
