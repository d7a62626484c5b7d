use yew::prelude::*;

use crate::content::CodeLanguage;

/// Splits source into display lines. The newline that ends an embedded file
/// does not produce an extra empty line.
pub fn code_lines(code: &str) -> Vec<&str> {
    code.strip_suffix('\n')
        .unwrap_or(code)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CodeblockProps {
    pub code: AttrValue,
    pub language: CodeLanguage,
}

#[function_component(Codeblock)]
pub fn codeblock(props: &CodeblockProps) -> Html {
    let lines = code_lines(&props.code);

    html! {
        <div class="codeblock">
            <div class="codeblock-language">{props.language.label()}</div>
            <pre class={props.language.class_name()}>
                <code class={props.language.class_name()}>
                    { for lines.iter().enumerate().map(|(i, line)| html! {
                        <div class="code-line">
                            <span class="line-number">{i + 1}</span>
                            <span class="line-content">{*line}</span>
                        </div>
                    }) }
                </code>
            </pre>
        </div>
    }
}
