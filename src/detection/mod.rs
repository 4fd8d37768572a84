//! 입력 방향 자동 감지 모듈

mod auto_detect;

pub use auto_detect::{classify, InputKind};
