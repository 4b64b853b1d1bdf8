//! 反向地理编码
//!
//! 给定坐标换取人类可读的地址字符串。网络查询失败绝不能
//! 影响调用它的流程，错误由调用方降级为占位文案。

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use geomemo_core::Coordinates;

/// 默认地理编码服务地址（Google Geocoding API 兼容格式）
const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// 地理编码错误
#[derive(Error, Debug, Clone)]
pub enum GeocodeError {
    /// 网络请求失败
    #[error("网络请求失败: {0}")]
    Network(String),

    /// 响应格式无法解析
    #[error("响应解析失败: {0}")]
    InvalidResponse(String),
}

/// 反向地理编码器
///
/// `Ok(None)` 表示服务正常但没有匹配的地址。
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coords: &Coordinates) -> Result<Option<String>, GeocodeError>;
}

// ============================================================================
// HTTP 实现
// ============================================================================

/// 地理编码响应（只取用到的字段）
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

/// 取第一个结果的格式化地址
fn first_address(response: GeocodeResponse) -> Option<String> {
    response
        .results
        .into_iter()
        .next()
        .map(|result| result.formatted_address)
}

/// 基于 HTTP 的反向地理编码器
pub struct HttpGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpGeocoder {
    /// 使用默认服务地址创建
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(GEOCODE_ENDPOINT, api_key)
    }

    /// 使用自定义服务地址创建（测试或自建服务）
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for HttpGeocoder {
    async fn reverse(&self, coords: &Coordinates) -> Result<Option<String>, GeocodeError> {
        debug!("反向地理编码: ({}, {})", coords.latitude, coords.longitude);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                (
                    "latlng",
                    format!("{},{}", coords.latitude, coords.longitude),
                ),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        Ok(first_address(body))
    }
}
