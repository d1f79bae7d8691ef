//! Virtual buffer tests

use ariadoc_a11y::{BufferItemKind, VirtualBuffer};
use ariadoc_html::parse;

const PAGE: &str = r##"
    <html><head><title>フォームの例</title><style>p { color: red }</style></head>
    <body>
        <nav aria-label="パンくず"><a href="/">ホーム</a></nav>
        <main>
            <h1>お問い合わせ</h1>
            <p>すべての項目を入力してください。</p>
            <p>詳しくは<a href="/help">ヘルプ</a>をご覧ください。</p>
            <div aria-hidden="true"><p>装飾</p><button>隠しボタン</button></div>
            <fieldset>
                <legend>連絡先</legend>
                <label for="mail">メール</label>
                <input id="mail" type="email">
            </fieldset>
            <input type="hidden" name="token" value="x">
            <button type="submit">送信</button>
        </main>
    </body></html>
"##;

fn texts(buffer: &VirtualBuffer) -> Vec<(BufferItemKind, &str)> {
    buffer.items().iter().map(|i| (i.kind, i.text.as_str())).collect()
}

#[test]
fn test_reading_order() {
    let doc = parse(PAGE);
    let buffer = VirtualBuffer::from_document(&doc, doc.body().unwrap());

    assert_eq!(
        texts(&buffer),
        vec![
            (BufferItemKind::Landmark, "パンくず、ナビゲーション"),
            (BufferItemKind::Link, "ホーム、リンク"),
            (BufferItemKind::Landmark, "メイン"),
            (BufferItemKind::Heading, "お問い合わせ"),
            (BufferItemKind::Text, "すべての項目を入力してください。"),
            (BufferItemKind::Text, "詳しくは"),
            (BufferItemKind::Link, "ヘルプ、リンク"),
            (BufferItemKind::Text, "をご覧ください。"),
            (BufferItemKind::Group, "連絡先、グループ。メール、編集可能、テキスト"),
            (BufferItemKind::Button, "送信、ボタン"),
        ]
    );
}

#[test]
fn test_quick_navigation() {
    let doc = parse(PAGE);
    let mut buffer = VirtualBuffer::from_document(&doc, doc.body().unwrap());

    assert_eq!(buffer.current().unwrap().text, "パンくず、ナビゲーション");
    assert_eq!(buffer.next_heading().unwrap().text, "お問い合わせ");
    assert_eq!(buffer.next_link().unwrap().text, "ヘルプ、リンク");
    assert_eq!(buffer.next_form_control().unwrap().kind, BufferItemKind::Group);
    assert_eq!(buffer.next_form_control().unwrap().text, "送信、ボタン");
    assert!(buffer.next_form_control().is_none());
    assert!(buffer.next_landmark().is_none());

    assert_eq!(buffer.move_prev().unwrap().kind, BufferItemKind::Group);
    assert_eq!(buffer.move_next().unwrap().text, "送信、ボタン");
    // Stays on the last item
    assert_eq!(buffer.move_next().unwrap().text, "送信、ボタン");
}

#[test]
fn test_head_is_not_read() {
    let doc = parse(PAGE);
    let buffer = VirtualBuffer::from_document(&doc, doc.document_element().unwrap());
    assert!(buffer.items().iter().all(|i| !i.text.contains("フォームの例")));
    assert!(buffer.items().iter().all(|i| !i.text.contains("color")));
}

#[test]
fn test_empty_page() {
    let doc = parse("");
    let mut buffer = VirtualBuffer::from_document(&doc, doc.body().unwrap());
    assert!(buffer.is_empty());
    assert!(buffer.current().is_none());
    assert!(buffer.move_next().is_none());
}
