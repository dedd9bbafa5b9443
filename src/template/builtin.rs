//! Built-in template library (12 x 12 grid)

/// Templates every registry created with `TemplateRegistry::builtin` starts with
pub const BUILTIN_TEMPLATES: &str = r#"
[[template]]
id = "blank"
name = "Blank"
description = "An empty slide"
category = "content"
tags = ["empty", "freeform"]

[[template]]
id = "title-slide"
name = "Title Slide"
description = "Course or lesson opener with a large title and subtitle"
category = "title"
tags = ["opening", "cover", "intro"]

[[template.elements]]
type = "title"
x = 0
y = 3
w = 12
h = 3
props = { align = "center" }

[[template.elements]]
type = "text"
x = 2
y = 6
w = 8
h = 2
props = { text = "Subtitle", align = "center" }

[template.default_props.title]
text = "Lesson title"
level = 1

[[template]]
id = "section-break"
name = "Section Break"
description = "Divider between parts of a lesson"
category = "title"
tags = ["divider", "chapter"]

[[template.elements]]
type = "title"
x = 0
y = 4
w = 12
h = 2
props = { align = "center" }

[[template.elements]]
type = "text"
x = 2
y = 6
w = 8
h = 1
props = { align = "center" }

[template.default_props.title]
text = "Section"
level = 1

[[template]]
id = "title-content"
name = "Title and Content"
description = "Heading above a single block of text"
category = "content"
tags = ["text", "bullets", "lecture"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "text"
x = 0
y = 2
w = 12
h = 10

[template.default_props.title]
text = "Slide title"
level = 2

[template.default_props.text]
text = "Add your content here"

[[template]]
id = "two-column"
name = "Two Column"
description = "Two side-by-side text columns"
category = "content"
tags = ["columns", "split", "side-by-side"]

[[template.elements]]
type = "text"
x = 0
y = 0
w = 6
h = 12

[[template.elements]]
type = "text"
x = 6
y = 0
w = 6
h = 12

[template.default_props.text]
text = "Column text"

[[template]]
id = "comparison"
name = "Comparison"
description = "Heading, two columns to contrast and a takeaway"
category = "comparison"
tags = ["versus", "columns", "pros-cons"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "text"
x = 0
y = 2
w = 6
h = 8
props = { text = "Option A" }

[[template.elements]]
type = "text"
x = 6
y = 2
w = 6
h = 8
props = { text = "Option B" }

[[template.elements]]
type = "callout"
x = 0
y = 10
w = 12
h = 2
props = { variant = "info" }

[template.default_props.title]
text = "Compare"
level = 2

[template.default_props.callout]
text = "Key difference"

[[template]]
id = "image-left"
name = "Image Left"
description = "Picture on the left, heading and explanation on the right"
category = "media"
tags = ["picture", "photo", "illustration"]

[[template.elements]]
type = "image"
x = 0
y = 0
w = 6
h = 12
props = { fit = "cover" }

[[template.elements]]
type = "title"
x = 6
y = 0
w = 6
h = 3

[[template.elements]]
type = "text"
x = 6
y = 3
w = 6
h = 9

[template.default_props.title]
text = "Slide title"
level = 2

[[template]]
id = "image-right"
name = "Image Right"
description = "Heading and explanation on the left, picture on the right"
category = "media"
tags = ["picture", "photo", "illustration"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 6
h = 3

[[template.elements]]
type = "text"
x = 0
y = 3
w = 6
h = 9

[[template.elements]]
type = "image"
x = 6
y = 0
w = 6
h = 12
props = { fit = "cover" }

[template.default_props.title]
text = "Slide title"
level = 2

[[template]]
id = "full-image"
name = "Full Image"
description = "One picture covering the slide"
category = "media"
tags = ["picture", "photo", "background"]

[[template.elements]]
type = "image"
x = 0
y = 0
w = 12
h = 12
props = { fit = "cover" }

[[template]]
id = "video-focus"
name = "Video Focus"
description = "Heading above a large embedded video"
category = "media"
tags = ["video", "lecture", "recording"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "video"
x = 1
y = 2
w = 10
h = 10

[template.default_props.title]
text = "Watch"
level = 2

[[template]]
id = "quote"
name = "Quote"
description = "A highlighted quotation with attribution"
category = "content"
tags = ["citation", "highlight"]

[[template.elements]]
type = "text"
x = 1
y = 3
w = 10
h = 4
props = { text = "Quotation", align = "center" }

[[template.elements]]
type = "text"
x = 6
y = 8
w = 5
h = 1
props = { text = "Author", align = "right" }

[[template]]
id = "chart-focus"
name = "Chart Focus"
description = "Chart with a side panel for interpretation"
category = "content"
tags = ["data", "graph", "statistics"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "chart"
x = 0
y = 2
w = 8
h = 10
props = { chartType = "bar" }

[[template.elements]]
type = "text"
x = 8
y = 2
w = 4
h = 10

[template.default_props.title]
text = "Results"
level = 2

[[template]]
id = "table"
name = "Table"
description = "Heading above a data table"
category = "content"
tags = ["data", "grid", "rows"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "table"
x = 0
y = 2
w = 12
h = 10

[template.default_props.title]
text = "Overview"
level = 2

[[template]]
id = "quiz"
name = "Quiz"
description = "Knowledge check with a question block"
category = "assessment"
tags = ["question", "test", "check"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "quiz"
x = 0
y = 2
w = 12
h = 10

[template.default_props.title]
text = "Check your understanding"
level = 2

[[template]]
id = "code-walkthrough"
name = "Code Walkthrough"
description = "Code listing with explanation alongside"
category = "code"
tags = ["programming", "snippet", "example"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "code"
x = 0
y = 2
w = 8
h = 10

[[template.elements]]
type = "text"
x = 8
y = 2
w = 4
h = 10

[template.default_props.title]
text = "Example"
level = 2

[template.default_props.code]
language = "python"

[[template]]
id = "summary"
name = "Summary"
description = "Recap of the lesson with a closing tip"
category = "closing"
tags = ["recap", "takeaways", "wrap-up"]

[[template.elements]]
type = "title"
x = 0
y = 0
w = 12
h = 2

[[template.elements]]
type = "text"
x = 0
y = 2
w = 12
h = 7

[[template.elements]]
type = "callout"
x = 0
y = 9
w = 12
h = 3
props = { variant = "tip" }

[template.default_props.title]
text = "Summary"
level = 2

[template.default_props.callout]
text = "Next up"
"#;
