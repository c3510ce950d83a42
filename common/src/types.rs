//! プロジェクトレコードの型定義
//!
//! ギャラリーとビューアで共有される静的データ。
//! 元データセットの短いキー名（short / full / thumb / takeaway）も受け付ける。

use serde::{Deserialize, Serialize};

/// 1プロジェクト分の表示データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub id: String,

    pub title: String,

    #[serde(alias = "short")]
    pub short_description: String,

    #[serde(alias = "full")]
    pub full_description: String,

    /// スライド画像（空ならサムネイルかプレースホルダ1枚）
    pub images: Vec<String>,

    #[serde(alias = "thumb", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    pub tags: Vec<String>,

    pub role: String,

    pub timeline: String,

    pub tools: Vec<String>,

    #[serde(alias = "takeaway")]
    pub takeaways: Vec<String>,
}

impl ProjectRecord {
    /// 空文字列を除いた明示的なサムネイル
    fn explicit_thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.is_empty())
    }

    /// カード用サムネイル: thumbnail → images[0] → プレースホルダ
    pub fn resolved_thumbnail(&self, placeholder: &str) -> String {
        self.explicit_thumbnail()
            .or_else(|| self.images.iter().map(String::as_str).find(|s| !s.is_empty()))
            .unwrap_or(placeholder)
            .to_string()
    }

    /// ビューア用画像リスト。常に1枚以上
    pub fn resolved_images(&self, placeholder: &str) -> Vec<String> {
        let images: Vec<String> = self
            .images
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();

        if images.is_empty() {
            vec![self.explicit_thumbnail().unwrap_or(placeholder).to_string()]
        } else {
            images
        }
    }
}
