use super::EmailComponent;

pub(super) static COMPONENTS: &[EmailComponent] = &[
    EmailComponent {
        id: "button",
        name: "Button",
        description: "Call-to-action button",
        html: r##"<a href="#" style="display: inline-block; background-color: #3490dc; color: white; padding: 12px 24px; text-decoration: none; font-weight: bold; border-radius: 4px; text-align: center;">Click Here</a>"##,
    },
    EmailComponent {
        id: "divider",
        name: "Divider",
        description: "Horizontal line divider",
        html: r#"<hr style="border: 0; height: 1px; background-color: #e2e8f0; margin: 24px 0;">"#,
    },
    EmailComponent {
        id: "spacer",
        name: "Spacer",
        description: "Vertical spacing",
        html: r#"<div style="height: 32px;"></div>"#,
    },
    EmailComponent {
        id: "two-columns",
        name: "Two Columns",
        description: "Two-column layout",
        html: r#"<table style="width: 100%; border-collapse: collapse;">
  <tr>
    <td style="width: 50%; padding: 8px; vertical-align: top;">
      Left column content goes here.
    </td>
    <td style="width: 50%; padding: 8px; vertical-align: top;">
      Right column content goes here.
    </td>
  </tr>
</table>"#,
    },
    EmailComponent {
        id: "three-columns",
        name: "Three Columns",
        description: "Three-column layout",
        html: r#"<table style="width: 100%; border-collapse: collapse;">
  <tr>
    <td style="width: 33.33%; padding: 8px; vertical-align: top;">
      Left column content.
    </td>
    <td style="width: 33.33%; padding: 8px; vertical-align: top;">
      Middle column content.
    </td>
    <td style="width: 33.33%; padding: 8px; vertical-align: top;">
      Right column content.
    </td>
  </tr>
</table>"#,
    },
    EmailComponent {
        id: "image-text",
        name: "Image + Text",
        description: "Image with text beside it",
        html: r#"<table style="width: 100%; border-collapse: collapse;">
  <tr>
    <td style="width: 30%; padding: 8px; vertical-align: top;">
      <img src="https://via.placeholder.com/150" style="max-width: 100%; height: auto;">
    </td>
    <td style="width: 70%; padding: 8px; vertical-align: top;">
      <h3 style="margin-top: 0;">Image Caption</h3>
      <p>Description text goes here. You can describe the image or add any relevant content.</p>
    </td>
  </tr>
</table>"#,
    },
    EmailComponent {
        id: "callout",
        name: "Callout Box",
        description: "Highlighted information box",
        html: r#"<div style="background-color: #f8f9fa; border-left: 4px solid #3490dc; padding: 16px; margin: 16px 0;">
  <h4 style="margin-top: 0; color: #3490dc;">Important Note</h4>
  <p style="margin-bottom: 0;">This is a callout box that can highlight important information in your email.</p>
</div>"#,
    },
    EmailComponent {
        id: "product-card",
        name: "Product Card",
        description: "Product display with image and details",
        html: r##"<div style="border: 1px solid #e2e8f0; border-radius: 4px; overflow: hidden; margin: 16px 0;">
  <div style="padding: 16px; display: flex; align-items: center;">
    <div style="flex: 0 0 100px; margin-right: 16px;">
      <img src="https://via.placeholder.com/100" style="max-width: 100%; height: auto; display: block;">
    </div>
    <div>
      <h3 style="margin-top: 0; margin-bottom: 8px;">Product Name</h3>
      <p style="margin-bottom: 8px; color: #718096;">Category</p>
      <p style="margin-bottom: 8px;"><strong>$29.99</strong></p>
      <a href="#" style="display: inline-block; background-color: #3490dc; color: white; padding: 8px 16px; text-decoration: none; border-radius: 4px; font-size: 14px;">Buy Now</a>
    </div>
  </div>
</div>"##,
    },
    EmailComponent {
        id: "quote",
        name: "Testimonial Quote",
        description: "Customer testimonial with attribution",
        html: r#"<blockquote style="border-left: 4px solid #cbd5e0; padding-left: 16px; margin: 16px 0; font-style: italic; color: #4a5568;">
  <p>"This is an amazing product that completely solved our problem. The customer service was excellent too!"</p>
  <footer style="margin-top: 8px; font-size: 14px; color: #718096;">— Jane Smith, CEO at Company</footer>
</blockquote>"#,
    },
    EmailComponent {
        id: "footer",
        name: "Email Footer",
        description: "Standard email footer with social links",
        html: r##"<div style="margin-top: 32px; padding-top: 32px; border-top: 1px solid #e2e8f0; text-align: center; color: #718096; font-size: 14px;">
  <p>
    <a href="#" style="display: inline-block; margin: 0 8px; color: #718096; text-decoration: none;">Website</a>
    <a href="#" style="display: inline-block; margin: 0 8px; color: #718096; text-decoration: none;">Privacy Policy</a>
    <a href="#" style="display: inline-block; margin: 0 8px; color: #718096; text-decoration: none;">Unsubscribe</a>
  </p>
  <p style="margin-top: 16px;">© 2025 {{ shop.name }}. All rights reserved.</p>
  <p style="margin-top: 8px;">{{ shop.address }}</p>
</div>"##,
    },
];
