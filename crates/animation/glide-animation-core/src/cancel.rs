//! Cancelling running animations through the value they drive.

use crate::value::Value;

/// Container both execution contexts can read and assign.
///
/// Any assignment, including one that stores the value already held,
/// interrupts the animation currently driving the container.
pub trait SharedValue {
    fn value(&self) -> Value;
    fn set_value(&mut self, value: Value);
}

/// Stop whatever animation is driving `shared`, leaving it at its current value.
pub fn cancel_animation<S: SharedValue + ?Sized>(shared: &mut S) {
    let value = shared.value();
    shared.set_value(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording {
        value: Option<Value>,
        writes: Vec<Value>,
    }

    impl SharedValue for Recording {
        fn value(&self) -> Value {
            self.value.clone().unwrap_or(Value::Number(0.0))
        }

        fn set_value(&mut self, value: Value) {
            self.writes.push(value.clone());
            self.value = Some(value);
        }
    }

    #[test]
    fn cancel_reassigns_current_value() {
        let mut shared = Recording {
            value: Some(Value::text("40px")),
            ..Default::default()
        };
        cancel_animation(&mut shared);
        assert_eq!(shared.writes, vec![Value::text("40px")]);
        assert_eq!(shared.value(), Value::text("40px"));
    }
}
