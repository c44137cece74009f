use encoding_rs::{Encoding, UTF_8};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 按给定编码解码字节
///
/// 未知的编码标签回退到 UTF-8。无法解码的字节序列会被替换为 U+FFFD，
/// 返回值的第三项表示是否发生过替换。
pub fn decode_bytes(data: &[u8], document_encoding: &str) -> (String, &'static Encoding, bool) {
    let encoding = Encoding::for_label_no_replacement(document_encoding.as_bytes()).unwrap_or(UTF_8);
    let (text, used_encoding, had_errors) = encoding.decode(data);
    (text.into_owned(), used_encoding, had_errors)
}

/// 将已解码的 HTML 文本转换为 DOM
pub fn html_to_dom(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// 查找指定路径的DOM节点
pub fn find_nodes(node: &Handle, node_names: Vec<&str>) -> Vec<Handle> {
    let mut found_nodes = Vec::new();
    let Some(&node_name) = node_names.first() else {
        return found_nodes;
    };

    if node_names.len() == 1 {
        if get_node_name(node) == Some(node_name) {
            found_nodes.push(node.clone());
        }

        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names.clone()));
        }
    } else if get_node_name(node) == Some(node_name) {
        let mut new_node_names = node_names;
        new_node_names.remove(0);
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, new_node_names.clone()));
        }
    } else {
        for child_node in node.children.borrow().iter() {
            found_nodes.append(&mut find_nodes(child_node, node_names.clone()));
        }
    }

    found_nodes
}

/// 深度优先查找第一个满足条件的元素节点
pub fn find_first_element<F>(node: &Handle, predicate: &F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    if matches!(node.data, NodeData::Element { .. }) && predicate(node) {
        return Some(node.clone());
    }

    node.children
        .borrow()
        .iter()
        .find_map(|child_node| find_first_element(child_node, predicate))
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 检查元素的 class 属性是否包含给定类名
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// 收集节点下的文本
///
/// 每个文本节点先去掉首尾空白，空文本丢弃，其余以单个空格连接。
/// `skip_elements` 中列出的元素（连同其子树）不参与收集。
pub fn collect_text(node: &Handle, skip_elements: &[&str]) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_text_into(node, skip_elements, &mut parts);
    parts.join(" ")
}

fn collect_text_into(node: &Handle, skip_elements: &[&str], parts: &mut Vec<String>) {
    match &node.data {
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            let trimmed = contents.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
        NodeData::Element { name, .. } if skip_elements.contains(&&*name.local) => {}
        NodeData::Element { .. } | NodeData::Document => {
            for child_node in node.children.borrow().iter() {
                collect_text_into(child_node, skip_elements, parts);
            }
        }
        _ => {}
    }
}
