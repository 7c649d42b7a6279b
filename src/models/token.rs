//! # 替换变量数据模型
//!
//! 模板中 `%NAME%` 占位符对应的变量。
//!
//! ## 依赖关系
//! - 被 `resolve/` 使用
//! - 被 `config/` 反序列化

use crate::error::{PlowError, Result};
use serde::{Deserialize, Deserializer};

/// 配置文件中的原始变量定义（字段均可缺失）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenDef {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_to_string")]
    pub value: Option<String>,
}

#[cfg(test)]
impl TokenDef {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// 已校验的变量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub value: String,
}

impl Token {
    /// 模板中的占位符形式，如 `%FOO%`
    pub fn placeholder(&self) -> String {
        format!("%{}%", self.name)
    }
}

impl TryFrom<TokenDef> for Token {
    type Error = PlowError;

    fn try_from(def: TokenDef) -> Result<Self> {
        let name = def.name.ok_or(PlowError::MissingField {
            kind: "token",
            field: "name",
        })?;
        let value = def.value.ok_or(PlowError::MissingField {
            kind: "token",
            field: "value",
        })?;
        Ok(Token { name, value })
    }
}

/// YAML 标量（字符串、整数、浮点、布尔）
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// 将标量值统一转为字符串，`null` 视为缺失
fn scalar_to_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(scalar.map(|s| match s {
        Scalar::Text(s) => s,
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_complete_def() {
        let token = Token::try_from(TokenDef::new("name", "value")).unwrap();
        assert_eq!(token.name, "name");
        assert_eq!(token.value, "value");
        assert_eq!(token.placeholder(), "%name%");
    }

    #[test]
    fn test_token_without_name() {
        let def = TokenDef {
            name: None,
            value: Some("value".to_string()),
        };
        let err = Token::try_from(def).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("must be defined"));
    }

    #[test]
    fn test_token_without_value() {
        let def = TokenDef {
            name: Some("name".to_string()),
            value: None,
        };
        let err = Token::try_from(def).unwrap_err();
        assert!(matches!(
            err,
            PlowError::MissingField {
                kind: "token",
                field: "value"
            }
        ));
    }

    #[test]
    fn test_scalar_values_become_strings() {
        let defs: Vec<TokenDef> = serde_yaml::from_str(
            "- { name: PORT, value: 8080 }\n- { name: DEBUG, value: true }\n- { name: EMPTY, value: ~ }\n",
        )
        .unwrap();
        assert_eq!(defs[0].value.as_deref(), Some("8080"));
        assert_eq!(defs[1].value.as_deref(), Some("true"));
        assert_eq!(defs[2].value, None);
    }
}
