// Static technology list. Order is significant: substring matching returns the
// first entry that matches, so short keys that occur inside many other names
// ("go", "net") sit at the end.

use super::TechEntry;

const fn devicon(name: &'static str, logo: &'static str) -> TechEntry {
    TechEntry { name, logo }
}

pub static ENTRIES: &[TechEntry] = &[
    // Languages
    devicon("JavaScript", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg"),
    devicon("TypeScript", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg"),
    devicon("Python", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg"),
    devicon("Java", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg"),
    devicon("Kotlin", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kotlin/kotlin-original.svg"),
    devicon("Swift", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/swift/swift-original.svg"),
    devicon("C++", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/cplusplus/cplusplus-original.svg"),
    devicon("C#", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/csharp/csharp-original.svg"),
    devicon("Rust", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg"),
    devicon("Ruby", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/ruby/ruby-original.svg"),
    devicon("PHP", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/php/php-original.svg"),
    devicon("Dart", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/dart/dart-original.svg"),
    devicon("Scala", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/scala/scala-original.svg"),
    devicon("Elixir", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/elixir/elixir-original.svg"),
    devicon("Haskell", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/haskell/haskell-original.svg"),
    devicon("Solidity", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/solidity/solidity-original.svg"),
    devicon("Bash", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bash/bash-original.svg"),
    devicon("PowerShell", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/powershell/powershell-original.svg"),
    devicon("HTML", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg"),
    devicon("CSS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg"),
    devicon("Sass", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/sass/sass-original.svg"),
    devicon("GraphQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/graphql/graphql-plain.svg"),
    // Frontend
    devicon("React Native", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
    devicon("React", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg"),
    devicon("Next.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nextjs/nextjs-original.svg"),
    devicon("Vue.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vuejs/vuejs-original.svg"),
    devicon("Nuxt.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nuxtjs/nuxtjs-original.svg"),
    devicon("Angular", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/angularjs/angularjs-original.svg"),
    devicon("Svelte", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/svelte/svelte-original.svg"),
    devicon("Astro", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/astro/astro-original.svg"),
    devicon("Remix", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/remix/remix-original.svg"),
    devicon("Redux", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/redux/redux-original.svg"),
    devicon("Zustand", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/zustand/zustand-original.svg"),
    devicon("jQuery", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/jquery/jquery-original.svg"),
    devicon("Three.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/threejs/threejs-original.svg"),
    devicon("Tailwind CSS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tailwindcss/tailwindcss-original.svg"),
    devicon("Bootstrap", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bootstrap/bootstrap-original.svg"),
    devicon("Material UI", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/materialui/materialui-original.svg"),
    devicon("Shadcn UI", "https://avatars.githubusercontent.com/u/139895814"),
    devicon("Framer Motion", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/framermotion/framermotion-original.svg"),
    devicon("Storybook", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/storybook/storybook-original.svg"),
    devicon("Flutter", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flutter/flutter-original.svg"),
    devicon("Electron", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/electron/electron-original.svg"),
    devicon("Webpack", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/webpack/webpack-original.svg"),
    devicon("Vite", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vitejs/vitejs-original.svg"),
    // Backend
    devicon("Node.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg"),
    devicon("Express.js", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/express/express-original.svg"),
    devicon("NestJS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nestjs/nestjs-original.svg"),
    devicon("Deno", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/denojs/denojs-original.svg"),
    devicon("Bun", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/bun/bun-original.svg"),
    devicon("Socket.io", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/socketio/socketio-original.svg"),
    devicon("Django", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/django/django-plain.svg"),
    devicon("Flask", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg"),
    devicon("FastAPI", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/fastapi/fastapi-original.svg"),
    devicon("Spring Boot", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/spring/spring-original.svg"),
    devicon("Ruby on Rails", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rails/rails-plain.svg"),
    devicon("Laravel", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/laravel/laravel-original.svg"),
    devicon("Prisma", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/prisma/prisma-original.svg"),
    devicon("LangChain", "https://avatars.githubusercontent.com/u/126733545"),
    // Data
    devicon("PostgreSQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg"),
    devicon("MySQL", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg"),
    devicon("MongoDB", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg"),
    devicon("Redis", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/redis/redis-original.svg"),
    devicon("SQLite", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/sqlite/sqlite-original.svg"),
    devicon("Firebase", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/firebase/firebase-original.svg"),
    devicon("Supabase", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/supabase/supabase-original.svg"),
    devicon("Elasticsearch", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/elasticsearch/elasticsearch-original.svg"),
    devicon("Apache Kafka", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/apachekafka/apachekafka-original.svg"),
    devicon("RabbitMQ", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rabbitmq/rabbitmq-original.svg"),
    devicon("Pandas", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/pandas/pandas-original.svg"),
    devicon("NumPy", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/numpy/numpy-original.svg"),
    devicon("TensorFlow", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tensorflow/tensorflow-original.svg"),
    devicon("PyTorch", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/pytorch/pytorch-original.svg"),
    // Infrastructure & tooling
    devicon("Docker", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg"),
    devicon("Kubernetes", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/kubernetes/kubernetes-original.svg"),
    devicon("Terraform", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/terraform/terraform-original.svg"),
    devicon("AWS", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg"),
    devicon("Google Cloud", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/googlecloud/googlecloud-original.svg"),
    devicon("Azure", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/azure/azure-original.svg"),
    devicon("Vercel", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vercel/vercel-original.svg"),
    devicon("Netlify", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/netlify/netlify-original.svg"),
    devicon("Heroku", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/heroku/heroku-original.svg"),
    devicon("Nginx", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nginx/nginx-original.svg"),
    devicon("Linux", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/linux/linux-original.svg"),
    devicon("GitHub Actions", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/githubactions/githubactions-original.svg"),
    devicon("GitHub", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/github/github-original.svg"),
    devicon("GitLab", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/gitlab/gitlab-original.svg"),
    devicon("Git", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg"),
    devicon("Jenkins", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/jenkins/jenkins-original.svg"),
    devicon("Jest", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/jest/jest-plain.svg"),
    devicon("Vitest", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/vitest/vitest-original.svg"),
    devicon("Cypress", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/cypressio/cypressio-original.svg"),
    devicon("Playwright", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/playwright/playwright-original.svg"),
    devicon("Selenium", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/selenium/selenium-original.svg"),
    devicon("Postman", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postman/postman-original.svg"),
    devicon("Figma", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg"),
    devicon("Jira", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/jira/jira-original.svg"),
    // Short keys last
    devicon(".NET", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/dot-net/dot-net-original.svg"),
    devicon("Go", "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/go/go-original-wordmark.svg"),
];
