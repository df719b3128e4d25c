use axiao_core::responder::{classify, Category, ResponseCatalog, ResponseSelector};

#[test]
fn greeting_input_always_returns_greeting_text() {
    let catalog = ResponseCatalog::default();
    for seed in 0..32 {
        let mut selector = ResponseSelector::with_seed(seed);
        let reply = selector.select("你好");
        assert!(reply.starts_with("您好！我是阿孝问问"));
        assert_eq!(reply, catalog.greeting());
    }
}

#[test]
fn question_input_never_returns_greeting() {
    let catalog = ResponseCatalog::default();
    for seed in 0..32 {
        let mut selector = ResponseSelector::with_seed(seed);
        for _ in 0..16 {
            let reply = selector.select("这个方案可行吗？");
            assert_ne!(reply, catalog.greeting());
            assert!(catalog.entries().contains(&reply));
        }
    }
}

#[test]
fn empty_input_may_return_any_entry() {
    let catalog = ResponseCatalog::default();
    let mut selector = ResponseSelector::with_seed(3);
    for _ in 0..32 {
        let reply = selector.select("");
        assert!(catalog.entries().contains(&reply));
    }
}

#[test]
fn mixed_greeting_question_classifies_as_greeting() {
    assert_eq!(classify("hello, 这个方案可行吗？"), Category::Greeting);

    let catalog = ResponseCatalog::default();
    let mut selector = ResponseSelector::with_seed(11);
    assert_eq!(selector.select("hello, 这个方案可行吗？"), catalog.greeting());
}
