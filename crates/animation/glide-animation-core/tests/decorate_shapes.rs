use glide_animation_core::{
    config::TimingConfig,
    curves::{Easing, Timing},
    decorate_animation, is_color, Animation, ChannelSnapshot, Curve, Frame, Handoff, Timestamp,
    Value, ValueShape,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn linear(duration_ms: f64) -> Timing {
    Timing::new(TimingConfig {
        duration_ms,
        easing: Easing::Linear,
    })
}

fn px(s: &Value) -> f64 {
    let text = s.as_text().expect("unit animation exposes text");
    assert!(text.ends_with("px"), "{text} should keep its suffix");
    text.trim_end_matches("px").parse().expect("numeric payload")
}

/// Jumps to the target once `100ms * target` have elapsed; colors use it to
/// make each channel finish at its own time.
#[derive(Clone, Debug, Default)]
struct FinishAt {
    start: Timestamp,
}

impl Curve for FinishAt {
    fn on_start(
        &mut self,
        frame: &mut Frame,
        value: f64,
        now: Timestamp,
        _previous: Option<&ChannelSnapshot>,
    ) {
        self.start = now;
        frame.current = value;
    }

    fn on_frame(&mut self, frame: &mut Frame, now: Timestamp) -> bool {
        let target = frame.to_value.unwrap_or(frame.current);
        if now - self.start >= 100.0 * target {
            frame.current = target;
            true
        } else {
            false
        }
    }

    fn box_clone(&self) -> Box<dyn Curve> {
        Box::new(self.clone())
    }
}

#[test]
fn numeric_decoration_matches_undecorated_base() {
    let mut raw = Animation::new(linear(100.0), Some(Value::Number(50.0)));
    let mut decorated = decorate_animation(Animation::new(linear(100.0), Some(Value::Number(50.0))));

    raw.on_start(&Value::Number(10.0), 0.0, None);
    decorated.on_start(&Value::Number(10.0), 0.0, None);
    assert_eq!(raw.current, decorated.current);
    assert_eq!(decorated.shape(), Some(ValueShape::Number));

    for i in 1..=8 {
        let now = i as f64 * 16.0;
        assert_eq!(raw.on_frame(now), decorated.on_frame(now));
        assert_eq!(raw.current, decorated.current);
    }
}

#[test]
fn unit_string_animates_monotonically_with_suffix() {
    let mut anim = decorate_animation(Animation::new(linear(160.0), Some(Value::text("100px"))));
    anim.on_start(&Value::text("0px"), 0.0, None);
    assert_eq!(
        anim.shape(),
        Some(ValueShape::Unit {
            prefix: String::new(),
            suffix: "px".into()
        })
    );

    let mut last = px(anim.current.as_ref().unwrap());
    assert_eq!(last, 0.0);
    let mut finished = false;
    let mut frames = 0;
    while !finished {
        frames += 1;
        finished = anim.on_frame(frames as f64 * 16.0);
        let v = px(anim.current.as_ref().unwrap());
        assert!(v > last, "{v} should exceed {last}");
        last = v;
    }
    assert_eq!(frames, 10);
    assert_eq!(anim.current, Some(Value::text("100px")));
}

#[test]
fn prefixed_negative_units_keep_prefix() {
    let mut anim = decorate_animation(Animation::new(linear(100.0), Some(Value::text("rotate90deg"))));
    anim.on_start(&Value::text("rotate-90deg"), 0.0, None);
    anim.on_frame(50.0);
    assert_eq!(anim.current, Some(Value::text("rotate0deg")));
    anim.on_frame(100.0);
    assert_eq!(anim.current, Some(Value::text("rotate90deg")));
}

#[test]
fn malformed_unit_string_propagates_nan() {
    let mut anim = decorate_animation(Animation::new(linear(100.0), Some(Value::text("100px"))));
    anim.on_start(&Value::text("auto"), 0.0, None);
    assert_eq!(anim.current, Some(Value::text("autoNaN")));
    anim.on_frame(50.0);
    assert_eq!(anim.current, Some(Value::text("autoNaN")));
}

#[test]
fn color_frames_always_recompose_a_color() {
    let mut anim = decorate_animation(Animation::new(linear(100.0), Some(Value::text("#0000ff"))));
    anim.on_start(&Value::text("#ff0000"), 0.0, None);
    assert_eq!(anim.shape(), Some(ValueShape::Color));
    assert_eq!(anim.current, Some(Value::text("rgba(255, 0, 0, 1)")));

    let mut finished = false;
    let mut now = 0.0;
    while !finished {
        now += 16.0;
        finished = anim.on_frame(now);
        let current = anim.current.as_ref().unwrap();
        assert!(is_color(current), "{current:?} should be a color");
    }
    assert_eq!(anim.current, Some(Value::text("rgba(0, 0, 255, 1)")));
}

#[test]
fn color_finishes_only_when_every_channel_does() {
    // black (h0 s0 v0 a1) -> translucent white (h0 s0 v1 a0.5):
    // hue and saturation finish at once, alpha at 50ms, value at 100ms.
    let mut anim = decorate_animation(Animation::new(
        FinishAt::default(),
        Some(Value::text("rgba(255, 255, 255, 0.5)")),
    ));
    anim.on_start(&Value::text("#000000"), 0.0, None);

    assert!(!anim.on_frame(10.0));
    assert!(!anim.on_frame(60.0), "value channel is still running");
    assert_eq!(anim.current, Some(Value::text("rgba(0, 0, 0, 0.5)")));
    assert!(anim.on_frame(100.0));
    assert_eq!(anim.current, Some(Value::text("rgba(255, 255, 255, 0.5)")));
}

#[test]
fn handoff_carries_normalized_continuity() {
    let mut first = decorate_animation(Animation::new(linear(100.0), Some(Value::text("100px"))));
    first.on_start(&Value::text("0px"), 0.0, None);
    first.on_frame(16.0);
    first.on_frame(32.0);

    let handoff = first.into_handoff().expect("started animation hands off");
    let Handoff::Scalar { shape, channel } = handoff else {
        panic!("unit animations hand off one channel");
    };
    assert_eq!(
        shape,
        ValueShape::Unit {
            prefix: String::new(),
            suffix: "px".into()
        }
    );
    approx(channel.current, 32.0, 1e-9);
    assert_eq!(channel.to_value, Some(100.0));
    approx(channel.velocity, 1000.0, 1e-6);
}

#[test]
fn color_handoff_exposes_channels() {
    let mut first = decorate_animation(Animation::new(linear(100.0), Some(Value::text("white"))));
    first.on_start(&Value::text("black"), 0.0, None);
    first.on_frame(50.0);
    let handoff = first.into_handoff().unwrap();
    assert!(handoff.shape().is_color());
    assert!(handoff.scalar().is_none());
    let v = handoff.color_channel(2).unwrap();
    approx(v.current, 0.5, 1e-9);
    assert!(handoff.color_channel(4).is_none());
}

#[test]
fn unstarted_animation_has_no_handoff() {
    let anim = decorate_animation(Animation::new(linear(100.0), Some(Value::Number(1.0))));
    assert!(anim.into_handoff().is_none());
}
