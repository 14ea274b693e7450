//! AnimationParameterMapper — ввод/состояние → параметры animation graph
//!
//! StareAtCamera: move = vertical, direction = horizontal (strafe blend).
//! FaceTravel: move = max(|h|, |v|), direction не трогаем.
//! isGrounded пишется всегда. Нет sink'а — нет работы.

use crate::components::{
    AnimationSink, InputSample, PARAM_DIRECTION, PARAM_IS_GROUNDED, PARAM_MOVE,
};
use crate::config::FacingPolicy;

pub fn map_animation(
    policy: FacingPolicy,
    input: &InputSample,
    grounded: bool,
    sink: Option<&mut dyn AnimationSink>,
) {
    let Some(sink) = sink else {
        return;
    };

    match policy {
        FacingPolicy::StareAtCamera => {
            sink.set_float(PARAM_MOVE, input.vertical);
            sink.set_float(PARAM_DIRECTION, input.horizontal);
        }
        FacingPolicy::FaceTravel => {
            let amount = input.horizontal.abs().max(input.vertical.abs());
            sink.set_float(PARAM_MOVE, amount);
        }
    }

    sink.set_bool(PARAM_IS_GROUNDED, grounded);
}
