use crate::tooltip::escape_html;

pub fn render_index(location: Option<&str>) -> String {
    let location_calendar = match location {
        Some(id) => format!(
            r#"<section class="panel">
      <h2>Location {id}</h2>
      <div class="calendar" data-calendar="location" data-location="{id}"></div>
    </section>"#,
            id = escape_html(id)
        ),
        None => String::new(),
    };

    INDEX_HTML.replace("{{LOCATION_CALENDAR}}", &location_calendar)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sessions</title>
  <script src="https://cdn.jsdelivr.net/npm/fullcalendar@6.1.15/index.global.min.js"></script>
  <script src="https://unpkg.com/@popperjs/core@2"></script>
  <script src="https://unpkg.com/tippy.js@6"></script>
  <style>
    :root {
      --ink: #363636;
      --muted: #6b6b6b;
      --card: #ffffff;
      --bg: #f4f5f7;
      --danger: #c0392b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
      padding: 24px 16px 48px;
    }

    main {
      width: min(1200px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    .panel {
      background: var(--card);
      border-radius: 12px;
      box-shadow: 0 6px 24px rgba(0, 0, 0, 0.06);
      padding: 20px;
    }

    .notification {
      border-left: 4px solid var(--danger);
      background: #fdecea;
      padding: 12px 16px;
      border-radius: 8px;
      display: flex;
      justify-content: space-between;
      gap: 12px;
    }

    .notification button {
      border: none;
      background: transparent;
      cursor: pointer;
      color: var(--muted);
    }

    .fc-tooltip .card {
      background: var(--card);
      border-radius: 8px;
      box-shadow: 0 8px 28px rgba(0, 0, 0, 0.18);
      min-width: 220px;
    }

    .fc-tooltip .arrow {
      display: none;
    }

    .fc-tooltip .card-header {
      font-weight: 600;
      padding: 10px 14px;
      border-bottom: 1px solid #eee;
    }

    .fc-tooltip .card-body {
      padding: 10px 14px;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main>
    <div id="calendar-notification" class="notification" hidden>
      <span data-role="payload"></span>
      <button type="button" data-role="dismiss" aria-label="Dismiss">&times;</button>
    </div>
    <section class="panel">
      <h2>My sessions</h2>
      <div class="calendar" data-calendar="user"></div>
    </section>
    {{LOCATION_CALENDAR}}
  </main>

  <script>
    const showNotification = (notification) => {
      const el = document.getElementById(notification.slot);
      if (!el) {
        return;
      }
      el.querySelector('[data-role="payload"]').textContent = notification.payload;
      el.dataset.level = notification.level;
      el.hidden = false;
    };

    const dismissNotification = async (slot) => {
      const el = document.getElementById(slot);
      if (el) {
        el.hidden = true;
      }
      await fetch(`/api/notifications/${encodeURIComponent(slot)}`, { method: 'DELETE' });
    };

    const loadNotifications = async () => {
      const res = await fetch('/api/notifications');
      if (res.ok) {
        (await res.json()).forEach(showNotification);
      }
    };

    const failureHandler = (slot) => async (error) => {
      let notification = { slot, level: 'error', payload: error.message };
      try {
        notification = await error.response.json();
      } catch (_) {
        // body was not a notification
      }
      showNotification(notification);
    };

    const currentView = async () => {
      const res = await fetch(`/api/view?width=${window.innerWidth}`);
      if (!res.ok) {
        return null;
      }
      return (await res.json()).view;
    };

    const initCalendars = async () => {
      const elements = Array.from(document.querySelectorAll('[data-calendar]'));
      const res = await fetch('/api/calendars', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          viewport_width: window.innerWidth,
          elements: elements.map((el) => ({
            calendar: el.dataset.calendar ?? null,
            location: el.dataset.location ?? null,
          })),
        }),
      });
      if (!res.ok) {
        console.error(`calendar bootstrap failed: ${res.status}`);
        return;
      }

      const bootstrap = await res.json();
      bootstrap.skipped.forEach((skipped) => {
        console.error(`calendar element ${skipped.index}: ${skipped.reason}`);
      });

      bootstrap.calendars.forEach(({ index, options }) => {
        try {
          const { plugins, tooltip, notificationSlot, eventSources, ...engineOptions } = options;
          let calendar;
          calendar = new FullCalendar.Calendar(elements[index], {
            ...engineOptions,
            eventSources: eventSources.map((source) => ({
              ...source,
              failure: failureHandler(notificationSlot),
            })),
            eventDidMount: (info) => {
              tippy(info.el, { ...tooltip, content: info.event.extendedProps.tooltip });
            },
            windowResize: async () => {
              const view = await currentView();
              if (view) {
                calendar.changeView(view);
              }
            },
          });
          calendar.render();
        } catch (error) {
          console.error(error);
        }
      });
    };

    document.querySelectorAll('.notification [data-role="dismiss"]').forEach((button) => {
      button.addEventListener('click', () => dismissNotification(button.closest('.notification').id));
    });

    loadNotifications();
    initCalendars();
  </script>
</body>
</html>
"#;
