pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #B91C1C;          /* school maroon */
  --primary-light: #DC2626;
  --primary-dark: #7F1D1D;
  --secondary: #CA8A04;        /* gold, achievements */
  --accent: #1D4ED8;           /* blue, announcements */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  --success: #22C55E;
  --error: #EF4444;

  /* Surfaces */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  --radius-md: 6px;
  --radius-lg: 10px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* the root gets .dark from the theme owner */
.dark {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
  --border: var(--neutral-700);
}"#;
