//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Roming 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RomingConfig {
    /// 소문자 로마 숫자 입력 시 정규형(대문자) 함께 표시 여부
    #[serde(default = "default_echo_canonical")]
    pub echo_canonical: bool,
    /// REPL 프롬프트 문자열
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_echo_canonical() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for RomingConfig {
    fn default() -> Self {
        Self {
            echo_canonical: default_echo_canonical(),
            prompt: default_prompt(),
        }
    }
}

/// 설정 파일 경로: ~/.config/roming/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("roming").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomingConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| RomingConfig::default()),
        Err(_) => RomingConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &RomingConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RomingConfig::default();
        assert!(config.echo_canonical);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RomingConfig {
            echo_canonical: false,
            prompt: ">> ".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RomingConfig = serde_json::from_str(&json).unwrap();
        assert!(!back.echo_canonical);
        assert_eq!(back.prompt, ">> ");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let back: RomingConfig = serde_json::from_str("{}").unwrap();
        assert!(back.echo_canonical);
        assert_eq!(back.prompt, "> ");
    }
}
