use super::nav::SCROLL_THRESHOLD;

pub const STYLESHEET: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;min-height:100vh;background:#020617;color:#e2e8f0;font-family:ui-sans-serif,system-ui,sans-serif;line-height:1.5}
a{color:inherit;text-decoration:none}
[hidden]{display:none!important}
.icon{display:inline-block;vertical-align:middle;flex-shrink:0}
.backdrop{position:fixed;inset:0;z-index:0;pointer-events:none;background:radial-gradient(ellipse at top,#0f172a,#020617 60%,#000)}
.backdrop .star{position:absolute;width:4px;height:4px;border-radius:50%;background:#fff;opacity:.6;animation:pulse 3s infinite}
.star.s1{top:40px;left:25%}.star.s2{top:33%;right:25%;background:#a5f3fc}.star.s3{top:50%;left:50%;opacity:.2}.star.s4{bottom:40px;right:40px}
main{position:relative;z-index:1}
.container{max-width:64rem;margin:0 auto;padding:0 1.5rem}
.narrow{max-width:56rem;text-align:center}
.site-nav{position:fixed;top:0;width:100%;z-index:50;padding:1.5rem 0;transition:all .3s}
.site-nav.scrolled{background:rgba(2,6,23,.9);backdrop-filter:blur(12px);border-bottom:1px solid #1e293b;padding:.75rem 0}
.nav-inner{max-width:72rem;margin:0 auto;padding:0 1.5rem;display:flex;justify-content:space-between;align-items:center}
.brand{font-size:1.25rem;font-weight:700;color:#ecfeff}
.accent{color:#22d3ee}
.nav-links{display:flex;gap:2rem}
.nav-link{color:#cbd5e1;font-size:.875rem;font-weight:500;transition:color .3s}
.nav-link:hover{color:#22d3ee}
.menu-toggle{display:none;background:none;border:0;color:#cbd5e1;cursor:pointer}
.mobile-menu{position:absolute;top:100%;left:0;width:100%;background:#0f172a;border-bottom:1px solid #1e293b;padding:1.5rem;display:flex;flex-direction:column;gap:1rem}
.mobile-menu .nav-link{font-size:1.125rem}
.hero{position:relative;padding:12rem 1.5rem 8rem;text-align:center}
.badge{display:inline-flex;align-items:center;gap:.5rem;padding:.25rem .75rem;border-radius:9999px;border:1px solid rgba(6,182,212,.3);background:rgba(6,182,212,.1);color:#67e8f9;font-size:.875rem;margin-bottom:1.5rem}
.hero-name{font-size:4.5rem;font-weight:700;color:#fff;margin:0 0 1.5rem;line-height:1.1}
.hero-title{font-size:1.5rem;color:#cffafe;font-weight:300;margin:0 0 .5rem}
.hero-meta{display:flex;justify-content:center;align-items:center;gap:.5rem;color:#94a3b8;margin-bottom:2rem}
.tagline{font-size:1.125rem;color:#94a3b8;max-width:42rem;margin:0 auto 2.5rem}
.cta{display:flex;justify-content:center;gap:1rem;flex-wrap:wrap}
.button{padding:.75rem 2rem;border-radius:9999px;font-weight:500}
.button.primary{background:#0891b2;color:#fff}
.button.secondary{background:#1e293b;border:1px solid #334155}
.scroll-hint{position:absolute;bottom:2.5rem;left:50%;transform:translateX(-50%);color:#64748b;animation:bounce 1s infinite}
section{padding:5rem 0}
.about{background:rgba(15,23,42,.5)}
.two-col{display:grid;grid-template-columns:1fr 1fr;gap:3rem;align-items:start}
.section-title{font-size:1.875rem;color:#fff;display:flex;align-items:center;gap:1rem}
.rule{display:inline-block;width:2rem;height:4px;background:#06b6d4;border-radius:9999px}
.lead{color:#94a3b8}
.education{display:flex;flex-direction:column;gap:2rem;margin-top:2rem}
.education-entry{display:flex;gap:1rem}
.entry-icon{width:2.5rem;height:2.5rem;border-radius:50%;background:#1e293b;color:#22d3ee;display:flex;align-items:center;justify-content:center}
.entry-body h4{margin:0;color:#fff;font-size:1.125rem;font-weight:500}
.entry-meta{color:#22d3ee;font-size:.875rem;margin-bottom:.5rem}
.entry-details{color:#94a3b8;font-size:.875rem}
.thesis{display:flex;align-items:center;gap:.5rem;font-size:.875rem;color:#cbd5e1}
.thesis-title{font-style:italic}
.thesis-link{font-size:.75rem;padding:.125rem .5rem;border-radius:4px;border:1px solid rgba(6,182,212,.3);color:#22d3ee}
.assignment{margin-top:.75rem;padding:1rem;border:1px solid #1e293b;border-radius:.5rem;background:rgba(2,6,23,.5)}
.assignment-label{display:flex;align-items:center;gap:.5rem;color:#22d3ee;font-size:.75rem;text-transform:uppercase;letter-spacing:.05em;font-weight:700}
.assignment-text{white-space:pre-line;color:#94a3b8;font-size:.875rem;font-style:italic}
.affiliation-card{position:sticky;top:6rem;display:flex;flex-direction:column;justify-content:center;align-items:center;aspect-ratio:1;max-width:20rem;margin:0 auto;border-radius:1rem;border:1px solid #334155;background:linear-gradient(135deg,#1e293b,#0f172a);overflow:hidden;transition:transform .3s}
.affiliation-card:hover{transform:scale(1.05);border-color:rgba(6,182,212,.5)}
.affiliation-card .icon-atom{position:absolute;top:1rem;right:1rem;color:rgba(22,78,99,.5);animation:spin-slow 20s linear infinite}
.card-heading{font-size:3rem;font-weight:700;color:#fff}
.card-subheading{font-size:.875rem;color:#06b6d4;text-transform:uppercase;letter-spacing:.1em}
.card-caption{font-size:.75rem;color:#64748b;text-transform:uppercase}
.section-head{text-align:center;margin-bottom:4rem}
.section-head h2{font-size:2.25rem;color:#fff}
.interest-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem}
.interest-card{background:#0f172a;border:1px solid #1e293b;padding:1.5rem;border-radius:.75rem}
.interest-icon{color:#22d3ee;margin-bottom:1rem}
.interest-card h3{color:#fff;margin:0 0 .5rem}
.interest-card p{color:#94a3b8;font-size:.875rem}
.projects{background:rgba(15,23,42,.3)}
.project-list{display:grid;gap:1.5rem}
.project-card{display:flex;justify-content:space-between;gap:1rem;background:rgba(30,41,59,.8);border:1px solid #334155;padding:1.5rem;border-radius:.5rem}
.project-kind{padding:.25rem .5rem;background:#334155;color:#67e8f9;font-size:.75rem;border-radius:4px;text-transform:uppercase;font-weight:600}
.project-year{color:#94a3b8;font-size:.875rem;margin-left:.75rem}
.project-card h3{color:#fff}
.project-link{color:#22d3ee;font-weight:500;white-space:nowrap}
.contact h2{font-size:2.25rem;color:#fff}
.blurb{color:#94a3b8;font-size:1.125rem;margin-bottom:2.5rem}
.contact-links{display:flex;justify-content:center;gap:1.5rem;flex-wrap:wrap;margin-bottom:4rem}
.email-link{display:flex;align-items:center;gap:.75rem;padding:1rem 2rem;background:#1e293b;border:1px solid #334155;border-radius:.5rem}
.profile-links{display:flex;gap:1rem}
.profile-link{display:flex;align-items:center;justify-content:center;width:3.5rem;height:3.5rem;background:#1e293b;border:1px solid #334155;border-radius:.5rem}
.site-footer{border-top:1px solid #1e293b;padding-top:2rem;color:#475569;font-size:.875rem}
@keyframes spin-slow{from{transform:rotate(0)}to{transform:rotate(360deg)}}
@keyframes pulse{50%{opacity:.2}}
@keyframes bounce{50%{transform:translate(-50%,-25%)}}
@media (max-width:768px){.nav-links{display:none}.menu-toggle{display:block}.two-col{grid-template-columns:1fr}.hero-name{font-size:3rem}.project-card{flex-direction:column}}
"#;

const SCRIPT_TEMPLATE: &str = r#"
(function () {
  var nav = document.getElementById("site-nav");
  var menu = document.getElementById("mobile-menu");
  var toggle = document.getElementById("menu-toggle");
  if (!nav || !menu || !toggle) return;

  function setMenu(open) {
    menu.hidden = !open;
    toggle.setAttribute("aria-expanded", open ? "true" : "false");
    toggle.querySelector(".glyph-open").hidden = !open;
    toggle.querySelector(".glyph-closed").hidden = open;
  }

  function onScroll() {
    nav.classList.toggle("scrolled", window.scrollY > __THRESHOLD__);
  }

  toggle.addEventListener("click", function () { setMenu(menu.hidden); });
  menu.querySelectorAll("a").forEach(function (link) {
    link.addEventListener("click", function () { setMenu(false); });
  });
  window.addEventListener("scroll", onScroll, { passive: true });
  window.addEventListener("pagehide", function () {
    window.removeEventListener("scroll", onScroll);
  }, { once: true });
})();
"#;

/// Browser-side counterpart of `NavState`: same toggles, same threshold.
pub fn script() -> String {
    SCRIPT_TEMPLATE.replace("__THRESHOLD__", &SCROLL_THRESHOLD.to_string())
}
