//! Terminal output helpers
//!
//! Plain line-oriented rendering with crossterm styling; streamed chunks
//! are flushed as they arrive so the reply types itself out.

use axiao_core_types::Conversation;
use crossterm::style::Stylize;
use std::io::{self, Write};

pub fn print_banner() {
    println!("{} v{}", "阿孝问问".cyan().bold(), axiao_core::VERSION);
    println!("输入消息开始对话，/help 查看命令。");
}

pub fn print_prompt() -> io::Result<()> {
    print!("{} ", "你 >".bold());
    io::stdout().flush()
}

pub fn print_assistant_label() {
    print!("{} ", "阿孝 >".cyan().bold());
    let _ = io::stdout().flush();
}

pub fn print_chunk(chunk: &str) {
    print!("{}", chunk);
    let _ = io::stdout().flush();
}

pub fn print_newline() {
    println!();
}

pub fn print_info(message: &str) {
    println!("{}", message.to_string().dark_grey());
}

pub fn print_error(message: &str) {
    println!("{}", message.to_string().red());
}

pub fn print_help() {
    println!("/new          新建对话");
    println!("/list         对话列表（按最近更新排序）");
    println!("/switch <id>  切换对话");
    println!("/delete <id>  删除对话");
    println!("/clear        清空所有对话");
    println!("/export       导出当前对话为 JSON");
    println!("/quit         退出");
}

pub fn print_conversation_list(conversations: &[Conversation]) {
    if conversations.is_empty() {
        print_info("暂无对话");
        return;
    }
    for conversation in conversations {
        let title = conversation.title.as_deref().unwrap_or("新对话");
        println!(
            "{}  {}  ({} 条消息)",
            conversation.id.clone().dark_grey(),
            title,
            conversation.messages.len()
        );
    }
}
