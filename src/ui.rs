use crate::models::{FuelType, WidgetView};
use crate::sanitize::REJECTED_KEYS;

pub fn render_index(fuels: &[FuelType], authenticated: bool, view: &WidgetView) -> String {
    let rejected_keys = serde_json::to_string(&REJECTED_KEYS).unwrap_or_else(|_| "[]".to_string());
    INDEX_HTML
        .replace("{{AUTH}}", if authenticated { "true" } else { "false" })
        .replace("{{FUEL_OPTIONS}}", &render_fuel_options(fuels))
        .replace("{{REJECTED_KEYS}}", &rejected_keys)
        .replace("{{LABEL}}", view.presentation.label)
        .replace("{{ICON}}", view.presentation.icon)
        .replace("{{PLACEHOLDER}}", view.presentation.placeholder)
        .replace("{{TOTAL}}", &escape_html(&view.total_price))
        .replace("{{VOLUME}}", &escape_html(&view.calculated_volume))
        .replace("{{VOLUME_FIELD}}", &view.submission.volume)
        .replace("{{TOTAL_FIELD}}", &view.submission.total_amount)
        .replace("{{ERROR}}", &escape_html(view.error.as_deref().unwrap_or_default()))
        .replace("{{DISABLED}}", if view.submit_enabled { "" } else { "disabled" })
}

fn render_fuel_options(fuels: &[FuelType]) -> String {
    fuels
        .iter()
        .map(|fuel| {
            format!(
                r#"<div class="custom-select-option" data-value="{}" data-price="{}">{} &middot; {:.2} UAH</div>"#,
                escape_html(&fuel.id),
                fuel.price_per_liter,
                escape_html(&fuel.name),
                fuel.price_per_liter
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fuel POS</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" />
  <style>
    :root {
      --bg: #0d0d0d;
      --card: #1a1a1a;
      --border: #262626;
      --ink: #d1d5db;
      --accent: #ed5909;
      --accent-dark: #d04f08;
      --danger: #f87171;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .pos {
      width: min(480px, 100%);
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 28px;
      display: grid;
      gap: 18px;
    }

    h1 {
      margin: 0;
      color: #ffffff;
      font-size: 1.4rem;
    }

    .custom-select {
      position: relative;
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 12px 14px;
      cursor: pointer;
    }

    .custom-select.chosen,
    .custom-select.open {
      border-color: var(--accent);
    }

    .placeholder {
      color: #6b7280;
    }

    .custom-select-options {
      display: none;
      position: absolute;
      left: 0;
      right: 0;
      top: calc(100% + 4px);
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 10px;
      z-index: 10;
    }

    .custom-select-options.show {
      display: block;
    }

    .custom-select-option {
      padding: 10px 14px;
    }

    .custom-select-option:hover {
      background: var(--accent-dark);
    }

    .toggle {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 8px;
    }

    .toggle-btn {
      border: 1px solid var(--border);
      background: var(--card);
      color: var(--ink);
      border-radius: 10px;
      padding: 10px;
      cursor: pointer;
    }

    .toggle-btn:hover:not(.active) {
      background: var(--accent-dark);
      color: #ffffff;
    }

    .toggle-btn.active {
      background: var(--accent);
      border-color: var(--accent);
      color: #ffffff;
    }

    label {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    label i {
      color: var(--accent);
    }

    #inputValue {
      width: 100%;
      padding: 12px 14px;
      border-radius: 10px;
      border: 1px solid var(--border);
      background: var(--bg);
      color: #ffffff;
      font-size: 1.1rem;
    }

    #inputValue:focus {
      outline: none;
      border-color: var(--accent);
    }

    .total {
      font-size: 1.6rem;
      color: #ffffff;
    }

    .hidden {
      display: none;
    }

    .error {
      color: var(--danger);
      min-height: 1.2em;
    }

    #submitBtn {
      border: none;
      border-radius: 10px;
      padding: 14px;
      background: var(--accent);
      color: #ffffff;
      font-size: 1rem;
      cursor: pointer;
    }

    #submitBtn:hover:not(:disabled) {
      background: var(--accent-dark);
    }

    #submitBtn:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }
  </style>
</head>
<body data-is-authenticated="{{AUTH}}">
  <main class="pos">
    <h1>Fuel purchase</h1>
    <form id="transactionForm" method="post" action="/pos/transaction">
      <div class="custom-select" id="customSelect">
        <span id="selectedFuel" class="placeholder">Select fuel type</span>
        <div class="custom-select-options" id="fuelOptions">
          {{FUEL_OPTIONS}}
        </div>
      </div>
      <input type="hidden" id="fuelTypeId" name="fuelTypeId" value="" />

      <div class="toggle">
        <button type="button" class="toggle-btn active" data-type="volume">Volume</button>
        <button type="button" class="toggle-btn" data-type="amount">Amount</button>
      </div>

      <label for="inputValue"><i id="inputIcon" class="{{ICON}}"></i><span id="inputLabel">{{LABEL}}</span></label>
      <input id="inputValue" type="text" inputmode="decimal" autocomplete="off" placeholder="{{PLACEHOLDER}}" />
      <div id="calculatedVolume" class="hidden">{{VOLUME}}</div>

      <div class="total" id="totalPrice">{{TOTAL}}</div>
      <div class="error" id="inputError">{{ERROR}}</div>

      <input type="hidden" id="volume" name="volume" value="{{VOLUME_FIELD}}" />
      <input type="hidden" id="totalAmount" name="totalAmount" value="{{TOTAL_FIELD}}" />

      <button type="submit" id="submitBtn" {{DISABLED}}>Complete transaction</button>
    </form>
  </main>

  <script>
    const rejectedKeys = {{REJECTED_KEYS}};
    const customSelect = document.getElementById('customSelect');
    const selectedFuel = document.getElementById('selectedFuel');
    const fuelOptions = document.getElementById('fuelOptions');
    const fuelTypeId = document.getElementById('fuelTypeId');
    const inputValue = document.getElementById('inputValue');
    const inputLabel = document.getElementById('inputLabel');
    const inputIcon = document.getElementById('inputIcon');
    const calculatedVolume = document.getElementById('calculatedVolume');
    const totalPrice = document.getElementById('totalPrice');
    const inputError = document.getElementById('inputError');
    const volumeField = document.getElementById('volume');
    const totalAmountField = document.getElementById('totalAmount');
    const submitBtn = document.getElementById('submitBtn');
    const toggleButtons = document.querySelectorAll('.toggle-btn');

    let mode = 'volume';
    let sequence = 0;

    const applyView = (view) => {
      inputLabel.textContent = view.presentation.label;
      inputIcon.className = view.presentation.icon;
      inputValue.placeholder = view.presentation.placeholder;
      calculatedVolume.classList.toggle('hidden', !view.presentation.shows_derived_volume);
      calculatedVolume.textContent = view.calculated_volume;
      totalPrice.textContent = view.total_price;
      volumeField.value = view.submission.volume;
      totalAmountField.value = view.submission.total_amount;
      inputError.textContent = view.error || '';
      submitBtn.disabled = !view.submit_enabled;
    };

    const refresh = async () => {
      const current = ++sequence;
      const res = await fetch('/api/quote', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          raw_input: inputValue.value,
          caret: Array.from(inputValue.value.slice(0, inputValue.selectionStart)).length,
          fuel_id: fuelTypeId.value || null,
          mode
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      const quote = await res.json();
      if (current !== sequence) {
        return;
      }
      if (inputValue.value !== quote.input) {
        inputValue.value = quote.input;
        // server carets count code points, the DOM counts UTF-16 units
        const caret = Array.from(quote.input).slice(0, quote.caret).join('').length;
        inputValue.setSelectionRange(caret, caret);
      }
      applyView(quote.view);
    };

    const update = () => {
      refresh().catch((err) => console.error(err));
    };

    inputValue.addEventListener('keydown', (event) => {
      if (rejectedKeys.includes(event.key)) {
        event.preventDefault();
      }
    });

    inputValue.addEventListener('input', update);

    customSelect.addEventListener('click', () => {
      fuelOptions.classList.toggle('show');
      customSelect.classList.toggle('open', fuelOptions.classList.contains('show'));
    });

    document.addEventListener('click', (event) => {
      if (!customSelect.contains(event.target)) {
        fuelOptions.classList.remove('show');
        customSelect.classList.remove('open');
      }
    });

    document.querySelectorAll('.custom-select-option').forEach((option) => {
      option.addEventListener('click', () => {
        fuelTypeId.value = option.dataset.value;
        selectedFuel.textContent = option.textContent;
        selectedFuel.classList.remove('placeholder');
        customSelect.classList.add('chosen');
        update();
      });
    });

    toggleButtons.forEach((button) => {
      button.addEventListener('click', () => {
        toggleButtons.forEach((other) => other.classList.toggle('active', other === button));
        mode = button.dataset.type;
        update();
      });
    });
  </script>
</body>
</html>
"#;
