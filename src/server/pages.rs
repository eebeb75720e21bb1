use crate::interpret::InterpretationResult;

pub const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>EKG Interpreter</title>
    </head>
    <body>
        <h2>Upload an EKG Image</h2>
        <form action="/api/ekg/interpret" enctype="multipart/form-data" method="post">
            <label for="age">Age:</label><br>
            <input type="text" name="age" id="age"><br>
            <label for="sex">Sex:</label><br>
            <input type="text" name="sex" id="sex"><br>
            <label for="symptoms">Symptoms:</label><br>
            <input type="text" name="symptoms" id="symptoms"><br>
            <label for="history">History:</label><br>
            <input type="text" name="history" id="history"><br>
            <label for="meds">Medications:</label><br>
            <input type="text" name="meds" id="meds"><br>
            <label for="vitals">Vitals:</label><br>
            <input type="text" name="vitals" id="vitals"><br><br>
            <input type="file" name="image"><br><br>
            <input type="submit" value="Interpret EKG">
        </form>
    </body>
</html>
"#;

pub const API_DOCS: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>EKG Interpreter API</title>
    </head>
    <body>
        <h1>EKG Interpreter API</h1>

        <h2>POST /api/ekg/interpret</h2>
        <p>Upload an EKG image with optional clinical context. The image is sent to a
        multimodal model for interpretation.</p>
        <p>Content type: <code>multipart/form-data</code></p>
        <table border="1" cellpadding="4">
            <tr><th>Field</th><th>Type</th><th>Required</th></tr>
            <tr><td><code>image</code></td><td>file</td><td>yes</td></tr>
            <tr><td><code>age</code></td><td>text</td><td>no</td></tr>
            <tr><td><code>sex</code></td><td>text</td><td>no</td></tr>
            <tr><td><code>symptoms</code></td><td>text</td><td>no</td></tr>
            <tr><td><code>history</code></td><td>text</td><td>no</td></tr>
            <tr><td><code>meds</code></td><td>text</td><td>no</td></tr>
            <tr><td><code>vitals</code></td><td>text</td><td>no</td></tr>
        </table>

        <h3>Response</h3>
<pre>{
  "overall_interpretation": "string",
  "context_received": {
    "age": "string | null",
    "sex": "string | null",
    "symptoms": "string | null",
    "history": "string | null",
    "meds": "string | null",
    "vitals": "string | null"
  }
}</pre>
        <p>Errors return <code>{"error": "message"}</code> with status 400 for bad
        uploads and 502 when the inference service fails.</p>
    </body>
</html>
"#;

pub fn render_result(result: &InterpretationResult) -> String {
    let context_items: String = result
        .context_received
        .labelled()
        .iter()
        .map(|(label, value)| {
            format!(
                "            <li><b>{}:</b> {}</li>\n",
                label,
                escape_html(value.unwrap_or("None"))
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>EKG Interpretation</title>
    </head>
    <body>
        <h2>Patient Context</h2>
        <ul>
{}        </ul>
        <h2>Interpretation</h2>
        <pre style="white-space: pre-wrap">{}</pre>
        <a href="/">Interpret another EKG</a>
    </body>
</html>
"#,
        context_items,
        escape_html(&result.overall_interpretation)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
