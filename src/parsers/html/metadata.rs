//! HTML 文档元数据处理模块
//!
//! 只保留词频统计需要的两项元数据：
//! - 文档标题，缺失时由调用方使用占位标题
//! - 文档内声明的字符编码，用于在 HTTP 头未声明编码时重新解码

use markup5ever_rcdom::{Handle, NodeData};

use crate::core::parse_content_type;

use super::dom::{find_nodes, get_node_attr};

/// 获取文档字符编码
///
/// 支持两种写法：
/// 1. HTML5 格式：`<meta charset="utf-8">`
/// 2. HTML4 格式：`<meta http-equiv="content-type" content="text/html; charset=utf-8">`
///
/// 空声明视为未声明。
pub fn get_charset(node: &Handle) -> Option<String> {
    for meta_node in find_nodes(node, vec!["html", "head", "meta"]).iter() {
        if let Some(meta_charset_node_attr_value) = get_node_attr(meta_node, "charset") {
            let charset = meta_charset_node_attr_value.trim().to_string();
            return Some(charset).filter(|c| !c.is_empty());
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(meta_content_type_node_attr_value) = get_node_attr(meta_node, "content") {
                let (_media_type, charset) =
                    parse_content_type(&meta_content_type_node_attr_value);
                return Some(charset).filter(|c| !c.is_empty());
            }
        }
    }

    None
}

/// 获取文档标题
///
/// 拼接第一个 `<title>` 的全部文本子节点并去掉首尾空白；
/// 没有 title 或标题为空时返回 `None`。
pub fn get_title(node: &Handle) -> Option<String> {
    let title_node = find_nodes(node, vec!["html", "head", "title"])
        .into_iter()
        .next()?;

    let mut title = String::new();
    for child_node in title_node.children.borrow().iter() {
        if let NodeData::Text { ref contents } = child_node.data {
            title.push_str(&contents.borrow());
        }
    }

    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
