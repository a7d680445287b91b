//! The stylesheet embedded into every converted document.
//!
//! Replaces both the Tailwind utility classes and the `sl-details` component
//! styles of the source markup, so the output renders standalone.

pub const STYLESHEET: &str = r#"
  body {
    font-family: "Helvetica Neue", Arial, "Hiragino Kaku Gothic ProN", "Hiragino Sans", Meiryo, sans-serif;
    line-height: 1.6;
    color: #333;
    margin: 0;
    padding: 20px;
  }
  .container-responsive {
    width: 100%;
    margin-left: auto;
    margin-right: auto;
  }
  @media (min-width: 768px) { .container-responsive { width: 80%; } }
  @media (min-width: 1024px) { .container-responsive { width: 66.666%; } }

  h3.year-heading {
    font-size: 1.5rem;
    margin-top: 0.75rem;
    margin-bottom: 0.75rem;
    border-bottom: 2px solid #ddd;
    padding-bottom: 0.5rem;
  }

  details {
    border: 1px solid #ccc;
    border-radius: 4px;
    margin-bottom: 8px;
    background-color: #fff;
    overflow: hidden;
  }

  summary {
    font-weight: bold;
    padding: 1rem;
    cursor: pointer;
    background-color: #f9f9f9;
    list-style: none;
    position: relative;
    transition: background-color 0.2s;
  }
  summary:hover { background-color: #eee; }
  summary::-webkit-details-marker { display: none; }
  summary::after {
    content: "+";
    position: absolute;
    right: 1rem;
    font-weight: bold;
    transition: transform 0.2s;
  }
  details[open] summary::after { transform: rotate(45deg); }

  .details-content {
    display: grid;
    grid-template-rows: 0fr;
    transition: grid-template-rows 0.3s ease-out;
  }
  details[open] .details-content { grid-template-rows: 1fr; }
  .details-inner { overflow: hidden; }
  .content-padding {
    padding: 1rem;
    border-top: 1px solid #eee;
  }
  .summary-title { font-size: 1.25rem; margin: 0; }
  p { margin-top: 0; margin-bottom: 1rem; }
"#;
