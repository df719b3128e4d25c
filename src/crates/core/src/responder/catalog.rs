/// Canned assistant responses. Index 0 is the greeting and is always
/// returned for greeting inputs; the rest are generic answer bodies.
const MOCK_RESPONSES: [&str; 5] = [
    "您好！我是阿孝问问，一个智能对话助手。我可以帮助您解答问题、提供建议、进行创意讨论等。请问有什么我可以帮助您的吗？",
    "这是一个很好的问题。让我来帮您分析一下：\n\n首先，我们需要考虑几个关键因素...\n\n其次，根据实际情况...\n\n最后，我建议...",
    "关于这个话题，我有以下几点看法：\n\n1. 从技术角度来看，这确实是一个值得探讨的方向\n2. 考虑到实际应用场景，我们需要权衡利弊\n3. 综合来看，这个方案具有一定的可行性",
    "理解您的想法。这个问题涉及到多个层面：\n\n**理论层面**：相关研究表明...\n\n**实践层面**：在实际应用中...\n\n**建议**：基于以上分析，我认为...",
    "很高兴能和您讨论这个话题！根据我的了解：\n\n✓ 这个方向确实很有前景\n✓ 需要注意的关键点包括...\n✓ 可以尝试从以下几个方面入手...\n\n希望这些信息对您有帮助！",
];

/// Ordered, fixed set of candidate response texts. Immutable for the
/// process lifetime.
#[derive(Debug, Clone, Copy)]
pub struct ResponseCatalog {
    entries: &'static [&'static str],
}

impl ResponseCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed greeting response (index 0).
    pub fn greeting(&self) -> &'static str {
        self.entries[0]
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self {
            entries: &MOCK_RESPONSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_entries_with_greeting_first() {
        let catalog = ResponseCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.greeting().starts_with("您好！我是阿孝问问"));
    }
}
