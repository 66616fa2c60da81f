/// Class names every generated document relies on
pub const DOCUMENT_CLASSES: &[&str] = &[
    "email-wrapper",
    "email-container",
    "header-block",
    "header-logo",
    "header-title",
    "header-subtitle",
    "header-social",
    "sponsor-block",
    "banner-block",
    "description-block",
    "note-section",
    "note-container",
    "component-heading",
    "component-paragraph",
    "footer-block",
    "footer-social",
    "footer-copyright",
];

/// Shared `<style>` block. Components carry inline styles; these rules
/// cover the skeleton and the single mobile breakpoint.
pub const STYLESHEET: &str = "body { margin: 0; padding: 0; background-color: #f4f4f4; font-family: Arial, Helvetica, sans-serif; color: #333333; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }
table { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }
img { border: 0; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }
a { color: #007bff; }
.email-wrapper { width: 100%; background-color: #f4f4f4; }
.email-container { width: 600px; max-width: 600px; margin: 0 auto; background-color: #ffffff; }
.header-block { padding: 32px 24px; }
.header-logo { display: inline-block; max-width: 100%; height: auto; margin-bottom: 16px; }
.header-title { margin: 0; font-size: 28px; line-height: 1.2; }
.header-subtitle { margin: 8px 0 0 0; font-size: 16px; opacity: 0.85; }
.header-social a { text-decoration: none; }
.sponsor-block { margin: 0 0 16px 0; font-size: 12px; }
.banner-block img { display: block; width: 100%; height: auto; }
.description-block { padding: 24px 24px 0 24px; font-size: 16px; line-height: 1.6; }
.note-section { padding: 20px 24px; }
.note-container { box-sizing: border-box; }
.component-heading { margin: 0 0 12px 0; }
.component-paragraph { font-size: 16px; line-height: 1.6; }
.footer-block { padding: 24px; font-size: 13px; line-height: 1.6; }
.footer-social a { text-decoration: none; }
.footer-copyright { margin: 12px 0 0 0; font-size: 12px; opacity: 0.8; }
@media only screen and (max-width: 600px) {
  .email-container { width: 100% !important; }
  .header-block, .footer-block { padding: 20px 16px !important; }
  .note-section { padding: 16px 12px !important; }
  .note-container { max-width: 100% !important; }
  .header-title { font-size: 22px !important; }
  img { max-width: 100% !important; height: auto !important; }
}";
