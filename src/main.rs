//! Roming - 아라비아 숫자/로마 숫자 자동변환 REPL
//!
//! 한 줄 입력마다 방향을 자동 감지하여 반대 표기를 출력합니다.

use roming::config::{load_config, save_config, RomingConfig};
use roming::{classify, to_arabic, to_roman, InputKind};
use std::io::{self, BufRead, Write};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = load_config();

    println!("Roming - 로마 숫자 변환기");
    println!("숫자 또는 로마 숫자를 입력하세요 (:q 종료, :canonical on|off 정규형 표시)");

    let stdin = io::stdin();

    loop {
        print!("{}", config.prompt);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        }

        let input = line.trim();

        match input {
            ":q" | ":quit" => break,
            ":canonical on" => {
                set_echo_canonical(&mut config, true);
                continue;
            }
            ":canonical off" => {
                set_echo_canonical(&mut config, false);
                continue;
            }
            _ => {}
        }

        convert_line(input, &config);
    }
}

/// 정규형 표시 설정 변경 및 저장
fn set_echo_canonical(config: &mut RomingConfig, enabled: bool) {
    config.echo_canonical = enabled;
    if let Err(e) = save_config(config) {
        log::error!("설정 저장 실패: {}", e);
    }
    println!("정규형 표시: {}", if enabled { "on" } else { "off" });
}

/// 한 줄 입력을 방향 감지 후 변환하여 출력
///
/// 한 번에 한 방향만 변환합니다. 출력한 값을 다시 변환 입력으로
/// 되돌리지 않으므로 두 표기가 서로를 갱신하는 순환은 발생하지 않습니다.
fn convert_line(input: &str, config: &RomingConfig) {
    match classify(input) {
        InputKind::Empty => println!(),
        InputKind::Arabic => {
            let Ok(value) = input.parse::<i64>() else {
                // i64 파싱 실패는 표현 범위 초과뿐
                println!("Invalid (표현 범위 초과: {})", input);
                return;
            };
            match to_roman(value) {
                Ok(numeral) => println!("로마 숫자: {}", numeral),
                Err(e) => println!("Invalid ({})", e),
            }
        }
        InputKind::Roman => match to_arabic(input) {
            Ok(number) => {
                println!("아라비아 숫자: {}", number);
                let canonical = input.to_uppercase();
                if config.echo_canonical && canonical != input {
                    // 검증을 통과했으므로 대문자 입력 자신이 정규형
                    println!("정규형: {}", canonical);
                }
            }
            Err(e) => println!("Invalid ({})", e),
        },
        InputKind::Unknown => {
            log::debug!("분류 불가 입력: {}", input);
            println!("Invalid (숫자도 로마 숫자도 아닌 입력)");
        }
    }
}
