use super::LiquidVariable;

pub(super) static VARIABLES: &[LiquidVariable] = &[
    LiquidVariable {
        name: "shop.name",
        description: "The name of your Shopify store",
        code: "{{ shop.name }}",
    },
    LiquidVariable {
        name: "shop.email",
        description: "The email address of your Shopify store",
        code: "{{ shop.email }}",
    },
    LiquidVariable {
        name: "shop.address",
        description: "The address of your Shopify store",
        code: "{{ shop.address }}",
    },
    LiquidVariable {
        name: "shop.email_logo_url",
        description: "URL to the logo you've set for email notifications",
        code: "{{ shop.email_logo_url }}",
    },
    LiquidVariable {
        name: "customer.first_name",
        description: "The customer's first name",
        code: "{{ customer.first_name }}",
    },
    LiquidVariable {
        name: "customer.last_name",
        description: "The customer's last name",
        code: "{{ customer.last_name }}",
    },
    LiquidVariable {
        name: "customer.email",
        description: "The customer's email address",
        code: "{{ customer.email }}",
    },
    LiquidVariable {
        name: "order.name",
        description: "The order name, typically the order number",
        code: "{{ order.name }}",
    },
    LiquidVariable {
        name: "order.created_at",
        description: "The date and time when the order was created",
        code: "{{ order.created_at | date: \"%B %d, %Y\" }}",
    },
    LiquidVariable {
        name: "order.subtotal_price",
        description: "The order subtotal (excluding tax and shipping)",
        code: "{{ order.subtotal_price | money }}",
    },
    LiquidVariable {
        name: "order.total_price",
        description: "The order total price",
        code: "{{ order.total_price | money }}",
    },
    LiquidVariable {
        name: "order.shipping_price",
        description: "The shipping cost for the order",
        code: "{{ order.shipping_price | money }}",
    },
    LiquidVariable {
        name: "order.note",
        description: "Any additional notes made by the customer",
        code: "{{ order.note }}",
    },
];
